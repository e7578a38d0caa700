//! Wire constants for the repeater's vendor control interface.

/// Teleorbit's USB vendor ID.
pub(crate) const FLEXIBAND_USB_VID: u16 = 0x27ae;
/// Product ID of the Flexiband repeater/upconverter board.
pub(crate) const REPEATER_USB_PID: u16 = 0x1028;

/// Vendor request codes understood by the repeater firmware.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ControlRequest {
    /// Start or stop the upconverter. The `value` field carries
    /// [`UPCONV_START`] or [`UPCONV_STOP`].
    StartStop = 0x00,
    /// Read one FPGA design info word. The `value` field selects the word.
    ReadFpgaInfo = 0x03,
    /// Set a tuner VGA gain. The gain rides in `value`, the RF slot in
    /// `index`; there is no data stage.
    SetVgaGain = 0x06,
    /// Write a DAC register. Register address in `value`, DAC number in
    /// `index`.
    WriteDacRegister = 0x0D,
    /// Write a modulator register. Register address in `value`, modulator
    /// number in `index`.
    WriteModRegister = 0x0E,
    /// Write a board-level register. Register address in `value`.
    WriteBoardRegister = 0x10,
}

// Modulator register addresses, carried in the `value` field of a
// `WriteModRegister` request.
pub(crate) const MOD_REG_PLL_CONTROL: u16 = 0x0C;
pub(crate) const MOD_REG_POWER_CONTROL: u16 = 0x1D;
pub(crate) const MOD_REG_OUTPUT_ATT: u16 = 0x1E;

// Board register addresses.
pub(crate) const BOARD_REG_LED: u16 = 0x13;

// Power control codes for the modulator, its PLL, and the DAC.
pub(crate) const MOD_POWER_UP: u32 = 0x81;
pub(crate) const MOD_POWER_DOWN: u32 = 0x80;
pub(crate) const MOD_PLL_POWER_UP: u32 = 0x18;
pub(crate) const MOD_PLL_POWER_DOWN: u32 = 0x1C;
pub(crate) const DAC_POWER_UP: u32 = 0x0000_0002;
pub(crate) const DAC_POWER_DOWN: u32 = 0x0000_0012;

// FPGA design info words, selected by the `value` field of a
// `ReadFpgaInfo` request. All are big-endian on the wire.
pub(crate) const FPGA_INFO_BUILD_NUMBER: u16 = 0x0001;
pub(crate) const FPGA_INFO_GIT_HASH: u16 = 0x0002;
pub(crate) const FPGA_INFO_BUILD_TIMESTAMP: u16 = 0x0003;

// Start/stop codes, carried in the `value` field of a `StartStop` request.
pub(crate) const UPCONV_START: u16 = 0x00;
pub(crate) const UPCONV_STOP: u16 = 0x01;
