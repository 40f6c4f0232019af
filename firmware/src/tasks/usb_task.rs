/*
* USB Task
*  - the boot line goes to the first host that connects
*  - lines queued while disconnected are dropped on connect
*/

// Resources
use crate::resources::SerialLine;
use crate::resources::SERIAL_CHANNEL_SIZE;

// Library
use sampler::serial::discard_backlog;
use sampler::serial::Packets;
use embassy_usb::class::cdc_acm::CdcAcmClass;
use embassy_usb::driver::EndpointError;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_sync::channel::Receiver;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

pub type SerialReceiver =
    Receiver<'static, CriticalSectionRawMutex, SerialLine, SERIAL_CHANNEL_SIZE>;
pub type SerialClass = CdcAcmClass<'static, Driver<'static, USB>>;

#[embassy_executor::task]
pub async fn usb_device_task(mut usb: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    usb.run().await;
}

#[embassy_executor::task]
pub async fn usb_communication_task(
    mut class: SerialClass,
    boot_line: SerialLine,
    lines: SerialReceiver,
) {
    let mut boot_line = Some(boot_line);

    loop {
        class.wait_connection().await;

        let stale = discard_backlog(|| lines.try_receive());
        log::info!("serial host connected, {} stale lines dropped", stale);

        if let Some(line) = boot_line.as_ref() {
            match write_line(&mut class, line.as_bytes()).await {
                Ok(()) => boot_line = None,
                Err(EndpointError::Disabled) => continue,
                Err(e) => log::warn!("boot line write failed: {:?}", e),
            }
        }

        loop {
            let line = lines.receive().await;

            match write_line(&mut class, line.as_bytes()).await {
                Ok(()) => {}
                Err(EndpointError::Disabled) => {
                    log::info!("serial host disconnected");
                    break;
                }
                Err(e) => log::warn!("serial write failed: {:?}", e),
            }
        }
    }
}

async fn write_line(class: &mut SerialClass, bytes: &[u8]) -> Result<(), EndpointError> {
    let max_packet_size = class.max_packet_size() as usize;

    for packet in Packets::new(bytes, max_packet_size) {
        class.write_packet(packet).await?;
    }
    Ok(())
}
