//! sitepulse-notify — best-effort alert delivery for SitePulse.
//!
//! The cycle runner hands finished [`pulse_core::Notification`]s to a
//! [`Notify`] implementation and moves on. Delivery is best-effort by
//! contract: every failure mode ends in an error log inside this crate,
//! never in an error the engine has to handle.
//!
//! The production implementation, [`DiscordNotifier`], posts one Discord
//! embed per notification to a webhook URL. Tests substitute a recording
//! double.

pub mod notifier;

pub use notifier::{DiscordNotifier, Notify};
