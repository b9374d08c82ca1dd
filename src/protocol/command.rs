//! Command definitions
//!
//! Represents the commands a client can send and the run control payload.

use std::fmt;

use crate::error::{PnsError, Result};

/// Product category, sent as the first two bytes of every frame
pub const PRODUCT_ID: [u8; 2] = *b"AB";

/// Number of values in a run control payload
pub const RUN_CONTROL_DATA_SIZE: usize = 6;

/// Command identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandId {
    /// Set LED and buzzer patterns
    RunControl = b'S',

    /// Turn off all LEDs and stop the buzzer
    Clear = b'C',

    /// Query the current LED and buzzer state
    GetData = b'G',
}

impl CommandId {
    /// Wire byte for this command
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Single-character discriminant used on the command line
    pub fn as_char(self) -> char {
        self as u8 as char
    }

    /// Size of the payload carried by this command
    pub fn payload_len(self) -> usize {
        match self {
            CommandId::RunControl => RUN_CONTROL_DATA_SIZE,
            CommandId::Clear | CommandId::GetData => 0,
        }
    }
}

impl TryFrom<u8> for CommandId {
    type Error = PnsError;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            b'S' => Ok(CommandId::RunControl),
            b'C' => Ok(CommandId::Clear),
            b'G' => Ok(CommandId::GetData),
            _ => Err(PnsError::InvalidCommand(format!(
                "unknown command id 0x{:02x}",
                byte
            ))),
        }
    }
}

impl TryFrom<char> for CommandId {
    type Error = PnsError;

    fn try_from(c: char) -> Result<Self> {
        let byte = u8::try_from(c)
            .map_err(|_| PnsError::InvalidCommand(format!("unknown command '{}'", c)))?;
        CommandId::try_from(byte)
    }
}

// =============================================================================
// Pattern Codes
// =============================================================================

/// LED unit pattern codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedPattern {
    Off = 0x00,
    On = 0x01,
    BlinkingSlow = 0x02,
    BlinkingMedium = 0x03,
    BlinkingHigh = 0x04,
    FlashingSingle = 0x05,
    FlashingDouble = 0x06,
    FlashingTriple = 0x07,
    NoChange = 0x09,
}

impl TryFrom<u8> for LedPattern {
    type Error = PnsError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0x00 => Ok(LedPattern::Off),
            0x01 => Ok(LedPattern::On),
            0x02 => Ok(LedPattern::BlinkingSlow),
            0x03 => Ok(LedPattern::BlinkingMedium),
            0x04 => Ok(LedPattern::BlinkingHigh),
            0x05 => Ok(LedPattern::FlashingSingle),
            0x06 => Ok(LedPattern::FlashingDouble),
            0x07 => Ok(LedPattern::FlashingTriple),
            0x09 => Ok(LedPattern::NoChange),
            _ => Err(PnsError::InvalidPattern(code)),
        }
    }
}

impl From<LedPattern> for u8 {
    fn from(pattern: LedPattern) -> u8 {
        pattern as u8
    }
}

impl fmt::Display for LedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LedPattern::Off => "off",
            LedPattern::On => "on",
            LedPattern::BlinkingSlow => "blinking (slow)",
            LedPattern::BlinkingMedium => "blinking (medium)",
            LedPattern::BlinkingHigh => "blinking (high)",
            LedPattern::FlashingSingle => "flashing single",
            LedPattern::FlashingDouble => "flashing double",
            LedPattern::FlashingTriple => "flashing triple",
            LedPattern::NoChange => "no change",
        };
        f.write_str(name)
    }
}

/// Buzzer mode codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BuzzerMode {
    Stop = 0x00,
    Ring = 0x01,
    NoChange = 0x09,
}

impl TryFrom<u8> for BuzzerMode {
    type Error = PnsError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0x00 => Ok(BuzzerMode::Stop),
            0x01 => Ok(BuzzerMode::Ring),
            0x09 => Ok(BuzzerMode::NoChange),
            _ => Err(PnsError::InvalidPattern(code)),
        }
    }
}

impl From<BuzzerMode> for u8 {
    fn from(mode: BuzzerMode) -> u8 {
        mode as u8
    }
}

impl fmt::Display for BuzzerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuzzerMode::Stop => "stop",
            BuzzerMode::Ring => "ring",
            BuzzerMode::NoChange => "no change",
        };
        f.write_str(name)
    }
}

/// LED unit colors, in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColor {
    Red,
    Amber,
    Green,
    Blue,
    White,
}

impl LedColor {
    /// All colors in wire order
    pub const ALL: [LedColor; 5] = [
        LedColor::Red,
        LedColor::Amber,
        LedColor::Green,
        LedColor::Blue,
        LedColor::White,
    ];

    /// Position of this color in a payload or status body
    pub fn index(self) -> usize {
        match self {
            LedColor::Red => 0,
            LedColor::Amber => 1,
            LedColor::Green => 2,
            LedColor::Blue => 3,
            LedColor::White => 4,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            LedColor::Red => "Red",
            LedColor::Amber => "Amber",
            LedColor::Green => "Green",
            LedColor::Blue => "Blue",
            LedColor::White => "White",
        }
    }
}

// =============================================================================
// Run Control Payload
// =============================================================================

/// Payload of the run control command
///
/// Codes are passed through untouched: values outside the documented
/// pattern sets are encoded as given and left to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunControlData {
    pub led_red: u8,
    pub led_amber: u8,
    pub led_green: u8,
    pub led_blue: u8,
    pub led_white: u8,
    pub buzzer_mode: u8,
}

impl RunControlData {
    /// Create run control data from raw codes
    pub fn new(
        led_red: u8,
        led_amber: u8,
        led_green: u8,
        led_blue: u8,
        led_white: u8,
        buzzer_mode: u8,
    ) -> Self {
        Self {
            led_red,
            led_amber,
            led_green,
            led_blue,
            led_white,
            buzzer_mode,
        }
    }

    /// Create run control data from named patterns (red..white order)
    pub fn from_patterns(leds: [LedPattern; 5], buzzer: BuzzerMode) -> Self {
        let [red, amber, green, blue, white] = leds;
        Self::new(
            red.into(),
            amber.into(),
            green.into(),
            blue.into(),
            white.into(),
            buzzer.into(),
        )
    }

    /// Create run control data from a list of values
    ///
    /// Requires at least six values (red, amber, green, blue, white, buzzer).
    /// Anything past the sixth is ignored.
    pub fn from_values(values: &[u8]) -> Result<Self> {
        match values {
            [red, amber, green, blue, white, buzzer, ..] => {
                Ok(Self::new(*red, *amber, *green, *blue, *white, *buzzer))
            }
            _ => Err(PnsError::MissingArguments {
                expected: RUN_CONTROL_DATA_SIZE,
                got: values.len(),
            }),
        }
    }

    /// Encode as the 6-byte payload
    pub fn encode(&self) -> [u8; RUN_CONTROL_DATA_SIZE] {
        [
            self.led_red,
            self.led_amber,
            self.led_green,
            self.led_blue,
            self.led_white,
            self.buzzer_mode,
        ]
    }
}
