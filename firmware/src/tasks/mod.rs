pub mod usb_task;
pub mod sampling;
