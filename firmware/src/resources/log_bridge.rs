/*
    log -> defmt

    Library code logs through the `log` facade; on the device those records
    go out over RTT next to the firmware's own defmt output.
*/

use super::*;
use log::Level;
use log::Log;
use log::Metadata;
use log::Record;
use defmt::Display2Format;

struct DefmtLogger;

impl Log for DefmtLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let target = record.target();
        let args = Display2Format(record.args());

        match record.level() {
            Level::Error => defmt::error!("{}: {}", target, args),
            Level::Warn => defmt::warn!("{}: {}", target, args),
            Level::Info => defmt::info!("{}: {}", target, args),
            Level::Debug => defmt::debug!("{}: {}", target, args),
            Level::Trace => defmt::trace!("{}: {}", target, args),
        }
    }

    fn flush(&self) {}
}

static DEFMT_LOGGER: DefmtLogger = DefmtLogger;

/// Must run before any task is spawned.
pub fn init() {
    // No atomic CAS on thumbv6m; nothing else runs yet.
    unsafe {
        let _ = log::set_logger_racy(&DEFMT_LOGGER);
        log::set_max_level_racy(LOG_LEVEL);
    }
}
