use std::ops::Range;

/// An error from operating the repeater.
///
/// `Io` and `Transfer` come straight from the USB stack and are not
/// retried anywhere in this crate. `ValueRange` means an argument was
/// rejected before any USB traffic was issued.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Underlying OS I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Transfer error from `nusb`.
    #[error("USB transfer error")]
    Transfer(#[from] nusb::transfer::TransferError),

    /// The provided argument value is out of range.
    #[error("Value ({val}) out of range ({}..{})", .range.start, .range.end)]
    #[allow(missing_docs)]
    ValueRange { range: Range<u32>, val: u32 },

    /// Returned data from the repeater didn't make any sense.
    #[error("Invalid return data")]
    ReturnData,
}
