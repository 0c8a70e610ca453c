//! Capability catalogs.
//!
//! The catalogs are the vocabulary of every manager call: scanner property
//! ids, the symbology ids reported in scan results, and the enumerated option
//! sets accepted by individual properties or cradle actions.
//!
//! Identifiers are associated constants on the [`PropertyId`](crate::PropertyId)
//! and [`SymbologyId`](crate::SymbologyId) newtypes:
//!
//! ```
//! use dlbridge_core::{PropertyId, SymbologyId};
//!
//! assert_eq!(PropertyId::CODE39_ENABLE.as_u32(), 256);
//! assert_eq!(PropertyId::from_name("CODE39_ENABLE"), Some(PropertyId::CODE39_ENABLE));
//! assert_eq!(SymbologyId::QRCODE.name(), Some("QRCODE"));
//! ```
//!
//! Option sets are `#[repr(i32)]` enums convertible into a
//! [`PropertyValue`](crate::PropertyValue):
//!
//! ```
//! use dlbridge_core::PropertyValue;
//! use dlbridge_core::catalog::SendCodeId;
//!
//! let value = PropertyValue::from(SendCodeId::UserdefinedIdentifierBeforeLabel);
//! assert_eq!(value, PropertyValue::Int(3));
//! ```

/// Declares the associated constants and name lookup of an id newtype.
macro_rules! id_catalog {
    ($ty:ident { $($name:ident = $value:literal),* $(,)? }) => {
        impl $ty {
            $(
                #[allow(missing_docs)]
                pub const $name: $ty = $ty::new($value);
            )*

            /// Every catalog entry with its name, in declaration order.
            pub const ALL: &'static [(&'static str, $ty)] = &[
                $( (stringify!($name), $ty::new($value)) ),*
            ];

            /// Catalog name of this id, if it is a catalog entry.
            #[must_use]
            pub fn name(&self) -> Option<&'static str> {
                Self::ALL
                    .iter()
                    .find(|(_, id)| *id == *self)
                    .map(|(name, _)| *name)
            }

            /// Look up a catalog entry by its exact name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .find(|(entry, _)| *entry == name)
                    .map(|(_, id)| *id)
            }
        }
    };
}

/// Declares an enumerated option set.
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident = $value:literal => $label:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[repr(i32)]
        pub enum $name {
            $(
                #[doc = $label]
                $variant = $value,
            )*
        }

        impl $name {
            /// Every option of the set, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Create the option from its raw value.
            #[must_use]
            pub fn from_i32(value: i32) -> Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// Convert the option to its raw value.
            #[inline]
            #[must_use]
            pub fn to_i32(self) -> i32 {
                self as i32
            }

            /// Catalog name of the option.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )*
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = crate::Error;

            fn try_from(value: i32) -> crate::Result<Self> {
                Self::from_i32(value).ok_or(crate::Error::UnknownOption {
                    set: stringify!($name),
                    value,
                })
            }
        }

        impl From<$name> for i32 {
            fn from(option: $name) -> i32 {
                option.to_i32()
            }
        }

        impl From<$name> for crate::PropertyValue {
            fn from(option: $name) -> Self {
                crate::PropertyValue::Int(i64::from(option.to_i32()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}

pub mod barcode;
pub mod cradle;
pub mod properties;
pub mod symbologies;

pub use barcode::*;
pub use cradle::{InsertState, LedAction, LockAction};

/// Name and options of every option set, for listing.
///
/// # Examples
///
/// ```
/// use dlbridge_core::catalog::option_sets;
///
/// let sets = option_sets();
/// let (_, options) = sets.iter().find(|(name, _)| *name == "LedAction").unwrap();
/// assert_eq!(options[0], ("BLINK_FAST", 0));
/// ```
#[must_use]
pub fn option_sets() -> Vec<(&'static str, Vec<(&'static str, i32)>)> {
    fn entries<T: Copy + Into<i32>>(all: &[T], name: fn(T) -> &'static str) -> Vec<(&'static str, i32)> {
        all.iter().map(|o| (name(*o), (*o).into())).collect()
    }

    vec![
        ("Aggressiveness", entries(Aggressiveness::ALL, Aggressiveness::name)),
        ("BeamMode", entries(BeamMode::ALL, BeamMode::name)),
        ("CharacterSetMode", entries(CharacterSetMode::ALL, CharacterSetMode::name)),
        ("DatamatrixAggressiveness", entries(DatamatrixAggressiveness::ALL, DatamatrixAggressiveness::name)),
        ("DatamatrixMirror", entries(DatamatrixMirror::ALL, DatamatrixMirror::name)),
        ("DatamatrixOpMode", entries(DatamatrixOpMode::ALL, DatamatrixOpMode::name)),
        ("EciPolicy", entries(EciPolicy::ALL, EciPolicy::name)),
        ("IlluminationTime", entries(IlluminationTime::ALL, IlluminationTime::name)),
        ("IlluminationType", entries(IlluminationType::ALL, IlluminationType::name)),
        ("ImageCaptureProfile", entries(ImageCaptureProfile::ALL, ImageCaptureProfile::name)),
        ("IntentDeliveryMode", entries(IntentDeliveryMode::ALL, IntentDeliveryMode::name)),
        ("InverseMode", entries(InverseMode::ALL, InverseMode::name)),
        ("Isbt128Mode", entries(Isbt128Mode::ALL, Isbt128Mode::name)),
        ("KeyWedgeMode", entries(KeyWedgeMode::ALL, KeyWedgeMode::name)),
        ("LengthControlMode", entries(LengthControlMode::ALL, LengthControlMode::name)),
        ("PartialResultMode", entries(PartialResultMode::ALL, PartialResultMode::name)),
        ("ScanMode", entries(ScanMode::ALL, ScanMode::name)),
        ("SendCodeId", entries(SendCodeId::ALL, SendCodeId::name)),
        ("ToneNotificationChannel", entries(ToneNotificationChannel::ALL, ToneNotificationChannel::name)),
        ("ToneNotificationMode", entries(ToneNotificationMode::ALL, ToneNotificationMode::name)),
        ("UpcEanCompositeMode", entries(UpcEanCompositeMode::ALL, UpcEanCompositeMode::name)),
        ("LedAction", entries(LedAction::ALL, LedAction::name)),
        ("LockAction", entries(LockAction::ALL, LockAction::name)),
        ("InsertState", entries(InsertState::ALL, InsertState::name)),
    ]
}
