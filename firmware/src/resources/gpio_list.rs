/*
    Resource Allocation Module

    Buttons short to ground, the pins are configured with pull-ups.
    Only the first `SAMPLER_CONFIG.button_count` of them are read.
*/

use super::*;

assign_resources! {
    buttons: ButtonResources {
        button1: PIN_10,
        button2: PIN_11,
        button3: PIN_12,
        button4: PIN_13,
    },

    imu: ImuResources {
        i2c: I2C0,
        sda: PIN_4,
        scl: PIN_5,
    },
}

bind_interrupts!(pub struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<peripherals::USB>;
});
