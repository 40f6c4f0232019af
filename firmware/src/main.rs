#![no_std]
#![no_main]

// Mod
#[macro_use]
mod resources;
mod tasks;

// Resources
use crate::resources::Irqs;
use crate::resources::AssignedResources;
use crate::resources::ButtonResources;
use crate::resources::ImuResources;
use crate::resources::log_bridge;
use crate::resources::IMU_ADDRESS;
use crate::resources::IMU_CONFIG;
use crate::resources::IMU_I2C_FREQUENCY;
use crate::resources::SAMPLER_CONFIG;
use crate::resources::USB_VID;
use crate::resources::USB_PID;
use crate::resources::USB_PACKET_SIZE;
use crate::resources::SERIAL_LINES;
use crate::resources::USB_STATE;
use crate::resources::CONFIG_DESC;
use crate::resources::BOS_DESC;
use crate::resources::CONTROL_BUF;

// Tasks
use crate::tasks::usb_task::usb_device_task;
use crate::tasks::usb_task::usb_communication_task;
use crate::tasks::sampling::run_sampler;
use crate::tasks::sampling::PadSampler;
use crate::tasks::sampling::ImuBus;

// Library
use defmt_rtt as _;
use panic_probe as _;

use sampler::ButtonBank;
use sampler::Sampler;
use sampler::mpu6050::Mpu6050;
use embassy_usb::class::cdc_acm::CdcAcmClass;
use embassy_usb::class::cdc_acm::State;
use embassy_rp::Peri;
use embassy_rp::gpio::AnyPin;
use embassy_rp::gpio::Input;
use embassy_rp::gpio::Pull;
use embassy_rp::i2c;
use embassy_rp::i2c::I2c;
use embassy_rp::usb::Driver;
use embassy_sync::channel::Channel;
use embassy_executor::Spawner;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    log_bridge::init();

    let p = embassy_rp::init(Default::default());
    let r = split_resources!(p);
    let usb_driver = Driver::new(p.USB, Irqs);

    let config = {
        let mut config = embassy_usb::Config::new(USB_VID, USB_PID);
        config.manufacturer = Some("Embassy");
        config.product = Some("Tilt pad");
        config.serial_number = Some("12345678");
        config.max_power = 100;
        config.max_packet_size_0 = 64;
        config
    };

    let mut builder = embassy_usb::Builder::new(
        usb_driver,
        config,
        CONFIG_DESC.init([0; 256]),
        BOS_DESC.init([0; 256]),
        &mut [],
        CONTROL_BUF.init([0; 64]),
    );

    let class = CdcAcmClass::new(&mut builder, USB_STATE.init(State::new()), USB_PACKET_SIZE);
    let usb_dev = builder.build();

    let serial = SERIAL_LINES.init(Channel::new());

    let buttons = button_bank(r.buttons);
    let imu = imu_sensor(r.imu);

    let (sampler, report): (PadSampler, _) = Sampler::start(imu, buttons, SAMPLER_CONFIG);

    spawner.must_spawn(usb_device_task(usb_dev));
    spawner.must_spawn(usb_communication_task(class, report.to_line(), serial.receiver()));

    run_sampler(sampler, serial.sender()).await
}

fn button_bank(r: ButtonResources) -> ButtonBank<Input<'static>> {
    let pins: [Peri<'static, AnyPin>; 4] = [
        r.button1.into(),
        r.button2.into(),
        r.button3.into(),
        r.button4.into(),
    ];

    let mut bank = ButtonBank::new();
    for pin in pins.into_iter().take(SAMPLER_CONFIG.button_count) {
        if bank.add(Input::new(pin, Pull::Up)).is_err() {
            defmt::warn!("button bank full");
        }
    }
    bank
}

fn imu_sensor(r: ImuResources) -> Mpu6050<ImuBus> {
    let mut config = i2c::Config::default();
    config.frequency = IMU_I2C_FREQUENCY;

    let bus = I2c::new_blocking(r.i2c, r.scl, r.sda, config);
    Mpu6050::new(bus, IMU_ADDRESS, IMU_CONFIG)
}
