/*!

Host-side control of the [Teleorbit Flexiband][flexiband] GNSS repeater's
upconverter board, made using the pure-rust [`nusb`] crate for USB
interfacing.

[flexiband]: https://teleorbit.eu/en/satnav/

The board carries two upconverter chains (modulator, DAC, and modulator
PLL each), two RF tuner slots, and two output channels, all configured
through USB vendor control transfers. This crate covers the full control
surface of the repeater:

- Powering the upconverter chains up or down and starting/stopping
  playback, with [`Repeater::power_on`] and [`Repeater::power_off`].
- Setting the per-slot tuner VGA gain, with [`Repeater::set_vga_gain`].
- Setting the per-channel output attenuation, with
  [`Repeater::set_output_attenuation`].
- Reading the loaded FPGA design's identity, with [`Repeater::info`].

The standard entry point for this library is [`open_repeater()`], which
will open the first available repeater.

Transfers are issued strictly one at a time; each operation completes (or
fails) on the device before the next one is sent. Nothing is retried, and
no state is kept between invocations beyond the open device handle.

```no_run
use anyhow::Result;
use flexiband_repeater::{OutputChannel, RfSlot};

#[tokio::main]
async fn main() -> Result<()> {
    let repeater = flexiband_repeater::open_repeater()?;

    // Power up both upconverter chains and start playback.
    repeater.power_on().await?;

    // Gain code 150 on both RF slots, 10 dB of output attenuation.
    repeater.set_vga_gain(RfSlot::Slot0, 150).await?;
    repeater.set_vga_gain(RfSlot::Slot1, 150).await?;
    repeater.set_output_attenuation(OutputChannel::Ch0, 10).await?;
    repeater.set_output_attenuation(OutputChannel::Ch1, 10).await?;

    Ok(())
}
```

*/

#![warn(missing_docs)]

mod cmd;
mod consts;
mod error;
pub mod info;

use nusb::transfer::{ControlIn, ControlOut, ControlType, Recipient};

use crate::cmd::Command;
use crate::consts::*;
use crate::info::Info;

pub use crate::error::Error;

/// One of the repeater's two output channels.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputChannel {
    /// Output channel 0.
    Ch0 = 0,
    /// Output channel 1.
    Ch1 = 1,
}

/// One of the repeater's two RF tuner slots.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RfSlot {
    /// RF slot 0.
    Slot0 = 0,
    /// RF slot 1.
    Slot1 = 1,
}

/// A repeater device descriptor, which can be opened.
///
/// These are mostly returned from calling [`list_repeater_devices`], but
/// can also be formed by trying to convert a [`nusb::DeviceInfo`] into
/// one.
pub struct RepeaterDescriptor {
    info: nusb::DeviceInfo,
}

impl RepeaterDescriptor {
    /// Get the serial number of this repeater, as a string.
    pub fn serial(&self) -> Option<&str> {
        self.info.serial_number()
    }

    /// Try and open this repeater device descriptor.
    pub fn open(self) -> Result<Repeater, std::io::Error> {
        let device = self.info.open()?;
        #[cfg(not(target_os = "windows"))]
        {
            if device.active_configuration()?.configuration_value() != 1 {
                device.detach_kernel_driver(0)?;
                device.set_configuration(1)?;
            }
        }
        let interface = device.detach_and_claim_interface(0)?;
        Ok(Repeater { interface })
    }
}

/// Try and turn any [`nusb::DeviceInfo`] descriptor into a repeater,
/// failing if the VID and PID don't match.
impl TryFrom<nusb::DeviceInfo> for RepeaterDescriptor {
    type Error = &'static str;
    fn try_from(value: nusb::DeviceInfo) -> Result<Self, Self::Error> {
        if value.vendor_id() != FLEXIBAND_USB_VID {
            Err("VID doesn't match for Flexiband")
        } else if value.product_id() != REPEATER_USB_PID {
            Err("VID recognized, PID not recognized")
        } else {
            Ok(RepeaterDescriptor { info: value })
        }
    }
}

/// List all available repeater devices.
pub fn list_repeater_devices() -> Result<Vec<RepeaterDescriptor>, std::io::Error> {
    Ok(nusb::list_devices()?
        .filter(|d| d.vendor_id() == FLEXIBAND_USB_VID && d.product_id() == REPEATER_USB_PID)
        .map(|d| RepeaterDescriptor { info: d })
        .collect::<Vec<RepeaterDescriptor>>())
}

/// Open the first detected repeater in the system.
///
/// This is a shortcut for calling [`list_repeater_devices`] and opening
/// the first one.
pub fn open_repeater() -> Result<Repeater, std::io::Error> {
    list_repeater_devices()?
        .into_iter()
        .next()
        .ok_or_else(|| std::io::Error::other("No Flexiband repeater devices"))?
        .open()
}

/// An open repeater. This is the main struct for talking to the board.
pub struct Repeater {
    interface: nusb::Interface,
}

impl Repeater {
    async fn send(&self, cmd: &Command) -> Result<(), Error> {
        let data = cmd.payload.bytes();
        tracing::debug!(
            request = cmd.request as u8,
            value = cmd.value,
            index = cmd.index,
            payload = ?data,
            "vendor control out"
        );
        Ok(self
            .interface
            .control_out(ControlOut {
                control_type: ControlType::Vendor,
                recipient: Recipient::Device,
                request: cmd.request as u8,
                value: cmd.value,
                index: cmd.index,
                data: &data,
            })
            .await
            .status?)
    }

    pub(crate) async fn read_info_word(&self, word: u16, len: u16) -> Result<Vec<u8>, Error> {
        Ok(self
            .interface
            .control_in(ControlIn {
                control_type: ControlType::Vendor,
                recipient: Recipient::Device,
                request: ControlRequest::ReadFpgaInfo as u8,
                value: word,
                index: 0,
                length: len,
            })
            .await
            .into_result()?)
    }

    /// Run a multi-command sequence in order. Every transfer is attempted
    /// even after a failure; the first error is reported once the
    /// sequence is done.
    async fn run_sequence(&self, seq: &[Command]) -> Result<(), Error> {
        let mut first_err = None;
        for cmd in seq {
            if let Err(e) = self.send(cmd).await {
                tracing::warn!(
                    request = cmd.request as u8,
                    value = cmd.value,
                    index = cmd.index,
                    "transfer failed: {e}"
                );
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Set the output attenuation of one output channel.
    ///
    /// Attenuation must be in the range of 0-47 dB, in 1 dB steps.
    pub async fn set_output_attenuation(
        &self,
        channel: OutputChannel,
        att_db: u8,
    ) -> Result<(), Error> {
        self.send(&Command::output_attenuation(channel, att_db)?)
            .await
    }

    /// Set the VGA gain of the RF tuner on one slot.
    ///
    /// The gain code must be in the range of 70-210.
    pub async fn set_vga_gain(&self, slot: RfSlot, gain: u8) -> Result<(), Error> {
        self.send(&Command::vga_gain(slot, gain)?).await
    }

    /// Power up both upconverter chains and start playback.
    ///
    /// Switches on the modulators, DACs, and modulator PLLs of both
    /// chains in turn, then issues the start command.
    pub async fn power_on(&self) -> Result<(), Error> {
        self.run_sequence(&cmd::power_sequence(true)).await
    }

    /// Stop playback and power down both upconverter chains.
    pub async fn power_off(&self) -> Result<(), Error> {
        self.run_sequence(&cmd::power_sequence(false)).await
    }

    /// Access the FPGA design info commands.
    pub fn info(&self) -> Info<'_> {
        Info::new(self)
    }
}
