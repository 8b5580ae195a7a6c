//! Provides the GPIO driver of the MCU being built for.
//!
//! | Manufacturer | MCU family | Driver                                                      |
//! | ------------ | ---------- | ----------------------------------------------------------- |
//! | Espressif    | ESP32      | [`strong-gpio-esp::Gpio`](../../strong_gpio_esp/index.html) |
//!
//! Other builds (e.g., host builds for documentation and tests) get a placeholder driver that
//! rejects every operation.

cfg_if::cfg_if! {
    if #[cfg(context = "esp")] {
        pub use strong_gpio_esp::Gpio;
    } else {
        mod dummy;
        pub use dummy::Gpio;
    }
}
