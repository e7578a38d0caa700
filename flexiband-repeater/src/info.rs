//! Read information about the FPGA design loaded on a Flexiband board.
//!
//! The FPGA answers a small set of vendor IN requests describing the
//! running bitstream. The [`Info`] struct exposes them:
//!
//! - The design's build number, with [`Info::fpga_build_number`].
//! - The short git hash of the design sources, with
//!   [`Info::fpga_git_hash`].
//! - The build timestamp, with [`Info::fpga_build_timestamp`].
//!
//! The general way to do this is:
//!
//! ```no_run
//! # use anyhow::Result;
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let repeater = flexiband_repeater::open_repeater()?;
//! let info = repeater.info();
//!
//! let build = info.fpga_build_number().await?;
//! let hash = info.fpga_git_hash().await?;
//! println!("FPGA build {build}, git {hash:08x}");
//! # Ok(())
//! # }
//! ```
use crate::consts::*;
use crate::{Error, Repeater};

/// Info-gathering operations for the repeater.
///
/// Borrows the interface while doing operations.
pub struct Info<'a> {
    inner: &'a Repeater,
}

impl<'a> Info<'a> {
    pub(crate) fn new(inner: &'a Repeater) -> Info<'a> {
        Self { inner }
    }

    /// Get the FPGA design's build number.
    pub async fn fpga_build_number(&self) -> Result<u16, Error> {
        let ret = self
            .inner
            .read_info_word(FPGA_INFO_BUILD_NUMBER, 2)
            .await?;
        let ret: [u8; 2] = ret.as_slice().try_into().map_err(|_| Error::ReturnData)?;
        Ok(u16::from_be_bytes(ret))
    }

    /// Get the short git hash of the FPGA design sources.
    pub async fn fpga_git_hash(&self) -> Result<u32, Error> {
        let ret = self.inner.read_info_word(FPGA_INFO_GIT_HASH, 4).await?;
        let ret: [u8; 4] = ret.as_slice().try_into().map_err(|_| Error::ReturnData)?;
        Ok(u32::from_be_bytes(ret))
    }

    /// Get the FPGA design's build time, in seconds since
    /// 2000-01-01 00:00:00.
    pub async fn fpga_build_timestamp(&self) -> Result<u32, Error> {
        let ret = self
            .inner
            .read_info_word(FPGA_INFO_BUILD_TIMESTAMP, 4)
            .await?;
        let ret: [u8; 4] = ret.as_slice().try_into().map_err(|_| Error::ReturnData)?;
        Ok(u32::from_be_bytes(ret))
    }
}
