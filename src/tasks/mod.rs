pub(crate) mod panel_control;
