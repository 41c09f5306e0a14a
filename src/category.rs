// Accessory Category - Closed reference set
//
// Each variant carries a stable wire code (1-44) that is embedded in the
// setup payload, plus a display label and an icon key for list surfaces.
// The codes are frozen: payloads encoded by older releases must keep
// decoding to the same category.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// CATEGORY
// ============================================================================

/// The kind of device a pairing credential belongs to.
///
/// Serialized as its bare integer code, which is the same value packed into
/// bits 4-10 of the setup payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AccessoryCategory {
    Other = 1,
    Bridge = 2,
    Fan = 3,
    GarageDoorOpener = 4,
    Lightbulb = 5,
    DoorLock = 6,
    Outlet = 7,
    Switch = 8,
    Thermostat = 9,
    Sensor = 10,
    SecuritySystem = 11,
    Door = 12,
    Window = 13,
    WindowCovering = 14,
    ProgrammableSwitch = 15,
    RangeExtender = 16,
    IpCamera = 17,
    VideoDoorbell = 18,
    AirPurifier = 19,
    Heater = 20,
    AirConditioner = 21,
    Humidifier = 22,
    Dehumidifier = 23,
    AppleTv = 24,
    Speaker = 25,
    Airport = 26,
    Sprinkler = 27,
    Faucet = 28,
    ShowerHead = 29,
    Television = 30,
    TargetController = 31,
    Router = 32,
    AudioReceiver = 33,
    TvSetTopBox = 34,
    TvSoundbar = 35,
    Speaker2 = 36,
    AirPlaySpeaker = 37,
    StreamingStick = 38,
    Display = 39,
    Streamer = 40,
    SetTopBox = 41,
    AudioSystem = 42,
    VideoProjector = 43,
    VideoStreamingBox = 44,
}

/// Error produced when a document or payload carries a code outside the set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown accessory category code {0}")]
pub struct UnknownCategoryCode(pub u8);

impl AccessoryCategory {
    /// Every category in code order.
    pub const ALL: [AccessoryCategory; 44] = [
        AccessoryCategory::Other,
        AccessoryCategory::Bridge,
        AccessoryCategory::Fan,
        AccessoryCategory::GarageDoorOpener,
        AccessoryCategory::Lightbulb,
        AccessoryCategory::DoorLock,
        AccessoryCategory::Outlet,
        AccessoryCategory::Switch,
        AccessoryCategory::Thermostat,
        AccessoryCategory::Sensor,
        AccessoryCategory::SecuritySystem,
        AccessoryCategory::Door,
        AccessoryCategory::Window,
        AccessoryCategory::WindowCovering,
        AccessoryCategory::ProgrammableSwitch,
        AccessoryCategory::RangeExtender,
        AccessoryCategory::IpCamera,
        AccessoryCategory::VideoDoorbell,
        AccessoryCategory::AirPurifier,
        AccessoryCategory::Heater,
        AccessoryCategory::AirConditioner,
        AccessoryCategory::Humidifier,
        AccessoryCategory::Dehumidifier,
        AccessoryCategory::AppleTv,
        AccessoryCategory::Speaker,
        AccessoryCategory::Airport,
        AccessoryCategory::Sprinkler,
        AccessoryCategory::Faucet,
        AccessoryCategory::ShowerHead,
        AccessoryCategory::Television,
        AccessoryCategory::TargetController,
        AccessoryCategory::Router,
        AccessoryCategory::AudioReceiver,
        AccessoryCategory::TvSetTopBox,
        AccessoryCategory::TvSoundbar,
        AccessoryCategory::Speaker2,
        AccessoryCategory::AirPlaySpeaker,
        AccessoryCategory::StreamingStick,
        AccessoryCategory::Display,
        AccessoryCategory::Streamer,
        AccessoryCategory::SetTopBox,
        AccessoryCategory::AudioSystem,
        AccessoryCategory::VideoProjector,
        AccessoryCategory::VideoStreamingBox,
    ];

    /// Stable wire code (1-44).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a category by wire code. `None` for codes outside the set.
    pub fn from_code(code: u8) -> Option<AccessoryCategory> {
        match code {
            1 => Some(AccessoryCategory::Other),
            2 => Some(AccessoryCategory::Bridge),
            3 => Some(AccessoryCategory::Fan),
            4 => Some(AccessoryCategory::GarageDoorOpener),
            5 => Some(AccessoryCategory::Lightbulb),
            6 => Some(AccessoryCategory::DoorLock),
            7 => Some(AccessoryCategory::Outlet),
            8 => Some(AccessoryCategory::Switch),
            9 => Some(AccessoryCategory::Thermostat),
            10 => Some(AccessoryCategory::Sensor),
            11 => Some(AccessoryCategory::SecuritySystem),
            12 => Some(AccessoryCategory::Door),
            13 => Some(AccessoryCategory::Window),
            14 => Some(AccessoryCategory::WindowCovering),
            15 => Some(AccessoryCategory::ProgrammableSwitch),
            16 => Some(AccessoryCategory::RangeExtender),
            17 => Some(AccessoryCategory::IpCamera),
            18 => Some(AccessoryCategory::VideoDoorbell),
            19 => Some(AccessoryCategory::AirPurifier),
            20 => Some(AccessoryCategory::Heater),
            21 => Some(AccessoryCategory::AirConditioner),
            22 => Some(AccessoryCategory::Humidifier),
            23 => Some(AccessoryCategory::Dehumidifier),
            24 => Some(AccessoryCategory::AppleTv),
            25 => Some(AccessoryCategory::Speaker),
            26 => Some(AccessoryCategory::Airport),
            27 => Some(AccessoryCategory::Sprinkler),
            28 => Some(AccessoryCategory::Faucet),
            29 => Some(AccessoryCategory::ShowerHead),
            30 => Some(AccessoryCategory::Television),
            31 => Some(AccessoryCategory::TargetController),
            32 => Some(AccessoryCategory::Router),
            33 => Some(AccessoryCategory::AudioReceiver),
            34 => Some(AccessoryCategory::TvSetTopBox),
            35 => Some(AccessoryCategory::TvSoundbar),
            36 => Some(AccessoryCategory::Speaker2),
            37 => Some(AccessoryCategory::AirPlaySpeaker),
            38 => Some(AccessoryCategory::StreamingStick),
            39 => Some(AccessoryCategory::Display),
            40 => Some(AccessoryCategory::Streamer),
            41 => Some(AccessoryCategory::SetTopBox),
            42 => Some(AccessoryCategory::AudioSystem),
            43 => Some(AccessoryCategory::VideoProjector),
            44 => Some(AccessoryCategory::VideoStreamingBox),
            _ => None,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            AccessoryCategory::Other => "Other",
            AccessoryCategory::Bridge => "Bridge",
            AccessoryCategory::Fan => "Fan",
            AccessoryCategory::GarageDoorOpener => "Garage Door",
            AccessoryCategory::Lightbulb => "Lightbulb",
            AccessoryCategory::DoorLock => "Door Lock",
            AccessoryCategory::Outlet => "Outlet",
            AccessoryCategory::Switch => "Switch",
            AccessoryCategory::Thermostat => "Thermostat",
            AccessoryCategory::Sensor => "Sensor",
            AccessoryCategory::SecuritySystem => "Security System",
            AccessoryCategory::Door => "Door",
            AccessoryCategory::Window => "Window",
            AccessoryCategory::WindowCovering => "Window Covering",
            AccessoryCategory::ProgrammableSwitch => "Programmable Switch",
            AccessoryCategory::RangeExtender => "Range Extender",
            AccessoryCategory::IpCamera => "IP Camera",
            AccessoryCategory::VideoDoorbell => "Video Doorbell",
            AccessoryCategory::AirPurifier => "Air Purifier",
            AccessoryCategory::Heater => "Heater",
            AccessoryCategory::AirConditioner => "Air Conditioner",
            AccessoryCategory::Humidifier => "Humidifier",
            AccessoryCategory::Dehumidifier => "Dehumidifier",
            AccessoryCategory::AppleTv => "Apple TV",
            AccessoryCategory::Speaker => "Speaker",
            AccessoryCategory::Airport => "Airport",
            AccessoryCategory::Sprinkler => "Sprinkler",
            AccessoryCategory::Faucet => "Faucet",
            AccessoryCategory::ShowerHead => "Shower Head",
            AccessoryCategory::Television => "Television",
            AccessoryCategory::TargetController => "Target Controller",
            AccessoryCategory::Router => "Router",
            AccessoryCategory::AudioReceiver => "Audio Receiver",
            AccessoryCategory::TvSetTopBox => "TV Set-Top Box",
            AccessoryCategory::TvSoundbar => "TV Soundbar",
            AccessoryCategory::Speaker2 => "Speaker 2",
            AccessoryCategory::AirPlaySpeaker => "AirPlay Speaker",
            AccessoryCategory::StreamingStick => "Streaming Stick",
            AccessoryCategory::Display => "Display",
            AccessoryCategory::Streamer => "Streamer",
            AccessoryCategory::SetTopBox => "Set-Top Box",
            AccessoryCategory::AudioSystem => "Audio System",
            AccessoryCategory::VideoProjector => "Video Projector",
            AccessoryCategory::VideoStreamingBox => "Streaming Box",
        }
    }

    /// Icon key for list surfaces. Several categories share an icon.
    pub fn icon(self) -> &'static str {
        match self {
            AccessoryCategory::Lightbulb => "lightbulb",
            AccessoryCategory::Fan => "fanblades",
            AccessoryCategory::GarageDoorOpener => "door.garage.closed",
            AccessoryCategory::DoorLock => "lock",
            AccessoryCategory::Outlet => "powerplug",
            AccessoryCategory::Switch => "switch.2",
            AccessoryCategory::Thermostat => "thermometer",
            AccessoryCategory::Sensor => "sensor.tag.radiowaves.forward",
            AccessoryCategory::SecuritySystem => "shield.lefthalf.filled",
            AccessoryCategory::Door => "door.left.hand.open",
            AccessoryCategory::Window => "window.horizontal",
            AccessoryCategory::WindowCovering => "window.shade.open",
            AccessoryCategory::IpCamera => "video",
            AccessoryCategory::VideoDoorbell => "bell.circle",
            AccessoryCategory::AirPurifier => "wind",
            AccessoryCategory::Heater => "flame",
            AccessoryCategory::AirConditioner => "snowflake",
            AccessoryCategory::Humidifier => "humidity",
            AccessoryCategory::Dehumidifier => "drop",
            AccessoryCategory::AppleTv => "appletv",
            AccessoryCategory::TvSetTopBox
            | AccessoryCategory::StreamingStick
            | AccessoryCategory::SetTopBox
            | AccessoryCategory::VideoStreamingBox => "tv",
            AccessoryCategory::Speaker
            | AccessoryCategory::Speaker2
            | AccessoryCategory::AirPlaySpeaker => "speaker.wave.2",
            AccessoryCategory::Airport => "wifi.router",
            AccessoryCategory::Sprinkler => "sprinkler.and.droplets",
            AccessoryCategory::Faucet => "spigot",
            AccessoryCategory::ShowerHead => "shower",
            AccessoryCategory::Television => "tv",
            AccessoryCategory::Router => "network",
            AccessoryCategory::AudioReceiver
            | AccessoryCategory::AudioSystem
            | AccessoryCategory::TvSoundbar => "hifispeaker",
            AccessoryCategory::Display => "display",
            AccessoryCategory::Streamer => "dot.radiowaves.left.and.right",
            AccessoryCategory::ProgrammableSwitch => "cpu",
            AccessoryCategory::Bridge => "arrow.triangle.branch",
            AccessoryCategory::RangeExtender => "wifi",
            AccessoryCategory::TargetController => "scope",
            AccessoryCategory::Other => "questionmark.app",
            AccessoryCategory::VideoProjector => "videoprojector",
        }
    }
}

impl Default for AccessoryCategory {
    fn default() -> Self {
        AccessoryCategory::Other
    }
}

impl From<AccessoryCategory> for u8 {
    fn from(category: AccessoryCategory) -> u8 {
        category.code()
    }
}

impl TryFrom<u8> for AccessoryCategory {
    type Error = UnknownCategoryCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        AccessoryCategory::from_code(code).ok_or(UnknownCategoryCode(code))
    }
}

// ============================================================================
// TESTS
// ============================================================================
