// Provide a mapping for the controller GPIO pins

//
//| GPIO # | Name      | Description                                               |
//| ------ | --------- | --------------------------------------------------------- |
//| 2      | BTN_X     | X axis push button. Pull-up, active low.                  |
//| 3      | BTN_Y     | Y axis push button. Pull-up, active low.                  |
//| 4      | BTN_Z     | Z axis push button. Pull-up, active low.                  |
//| 5      | BTN_AUX4  | AUX4 push button, also cycles the display mode.           |
//| 6      | RELAY_X   | X relay driver. Active high.                              |
//| 7      | RELAY_Y   | Y relay driver. Active high.                              |
//| 8      | RELAY_Z   | Z relay driver. Active low.                               |
//| 9      | RELAY_AUX | AUX relay driver. Active high.                            |
//| 10     | LED_X     | X relay indicator LED.                                    |
//| 11     | LED_Y     | Y relay indicator LED.                                    |
//| 12     | LED_Z     | Z relay indicator LED.                                    |
//| 13     | LED_AUX   | AUX relay indicator LED.                                  |
//| 14     | LED_S0    | Status LED 0.                                             |
//| 15     | LED_S1    | Status LED 1.                                             |
//| 16     | LED_S2    | Status LED 2.                                             |
//| 17     | LED_S3    | Status LED 3.                                             |
//| 18     | LED_S4    | Status LED 4.                                             |
//| 19     | AUX_OUT   | Spare auxiliary output. Held low.                         |

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
  /// Push buttons, in relay order
  buttons: ButtonResources {
    x: PIN_2,
    y: PIN_3,
    z: PIN_4,
    aux4: PIN_5,
  },
  relays: RelayResources {
    x: PIN_6,
    y: PIN_7,
    z: PIN_8,
    aux: PIN_9,
  },
  leds: LedResources {
    x: PIN_10,
    y: PIN_11,
    z: PIN_12,
    aux: PIN_13,
    s0: PIN_14,
    s1: PIN_15,
    s2: PIN_16,
    s3: PIN_17,
    s4: PIN_18,
  },
  aux_out: AuxOutputResources {
    pin: PIN_19,
  },
}
