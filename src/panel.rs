//! Photovoltaic panel power estimate.

use alloc::string::String;

use crate::error::{check_area, check_efficiency};
use crate::radiation::{Atmosphere, irradiance_on_plane_with};
use crate::time::Instant;
use crate::types::{GeoPosition, SurfaceOrientation};
use crate::{Error, Result};

/// A flat photovoltaic panel at a location and point in time.
///
/// Orientation, position and date/time are set independently and may be changed
/// between calls; every query recomputes from the current state. The date/time
/// is the location's standard (clock) time.
///
/// A panel is not internally synchronised: callers sharing one across threads
/// must serialise setter calls against queries, e.g. behind a `Mutex`.
///
/// # Example
/// ```
/// use solar_radiation::{GeoPosition, Instant, SolarPanel, SurfaceOrientation};
///
/// let mut panel = SolarPanel::new(2.1, 0.2).unwrap().with_label("roof");
/// panel.set_orientation(SurfaceOrientation::zenith());
/// panel.set_position(GeoPosition::new(40.73, -73.93, 0.0).unwrap());
/// panel.set_datetime(Instant::new(2019, 6, 21, 12, 0).unwrap());
///
/// let watts = panel.power().unwrap();
/// assert!(watts > 0.0 && watts < 2.1 * 0.2 * 1367.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolarPanel {
    /// Surface area in m²
    area: f64,
    /// Conversion efficiency (0 to 1)
    efficiency: f64,
    label: Option<String>,
    orientation: Option<SurfaceOrientation>,
    position: Option<GeoPosition>,
    datetime: Option<Instant>,
    atmosphere: Atmosphere,
}

impl SolarPanel {
    /// Creates a panel with the given surface area (m²) and efficiency.
    ///
    /// # Errors
    /// Returns `InvalidArea` if area is not positive, or `InvalidEfficiency` if
    /// efficiency is outside 0 to 1.
    pub fn new(area: f64, efficiency: f64) -> Result<Self> {
        check_area(area)?;
        check_efficiency(efficiency)?;
        Ok(Self {
            area,
            efficiency,
            label: None,
            orientation: None,
            position: None,
            datetime: None,
            atmosphere: Atmosphere::standard(),
        })
    }

    /// Attaches an identifying label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Uses the given atmosphere instead of the standard one.
    #[must_use]
    pub fn with_atmosphere(mut self, atmosphere: Atmosphere) -> Self {
        self.atmosphere = atmosphere;
        self
    }

    /// Sets the direction the panel faces.
    pub const fn set_orientation(&mut self, orientation: SurfaceOrientation) {
        self.orientation = Some(orientation);
    }

    /// Sets the location of the panel.
    pub const fn set_position(&mut self, position: GeoPosition) {
        self.position = Some(position);
    }

    /// Sets the date and standard (clock) time.
    pub const fn set_datetime(&mut self, datetime: Instant) {
        self.datetime = Some(datetime);
    }

    /// Gets the surface area in m².
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.area
    }

    /// Gets the conversion efficiency.
    #[must_use]
    pub const fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Gets the label, if one was attached.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Gets the atmosphere used for irradiance.
    #[must_use]
    pub const fn atmosphere(&self) -> &Atmosphere {
        &self.atmosphere
    }

    /// Beam irradiance on the panel surface in W/m².
    ///
    /// # Errors
    /// Returns `PanelNotConfigured` if orientation, position or date/time is unset.
    pub fn irradiance(&self) -> Result<f64> {
        let orientation = self
            .orientation
            .ok_or(Error::panel_not_configured("orientation"))?;
        let position = self
            .position
            .ok_or(Error::panel_not_configured("position"))?;
        let datetime = self
            .datetime
            .ok_or(Error::panel_not_configured("date/time"))?;

        irradiance_on_plane_with(
            &orientation,
            position.altitude(),
            &datetime,
            position.latitude(),
            Some(position.longitude()),
            &self.atmosphere,
        )
    }

    /// Electrical output power in W: irradiance × area × efficiency.
    ///
    /// # Errors
    /// Returns `PanelNotConfigured` if orientation, position or date/time is unset.
    pub fn power(&self) -> Result<f64> {
        let power = self.irradiance()? * self.area * self.efficiency;
        log::debug!(
            "panel {}: {power:.3} W",
            self.label.as_deref().unwrap_or("<unnamed>")
        );
        Ok(power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn configured(area: f64, efficiency: f64, latitude: f64, longitude: f64) -> SolarPanel {
        let mut panel = SolarPanel::new(area, efficiency).unwrap();
        panel.set_orientation(SurfaceOrientation::zenith());
        panel.set_position(GeoPosition::new(latitude, longitude, 0.0).unwrap());
        panel.set_datetime(Instant::new(2019, 1, 21, 12, 0).unwrap());
        panel
    }

    #[test]
    fn test_construction_validation() {
        assert!(SolarPanel::new(1.0, 0.5).is_ok());
        assert!(SolarPanel::new(-1.0, 0.5).is_err());
        assert!(SolarPanel::new(0.0, 0.5).is_err());
        assert!(SolarPanel::new(1.0, -0.1).is_err());
        assert!(SolarPanel::new(1.0, 1.1).is_err());

        let panel = SolarPanel::new(2.1, 0.2).unwrap().with_label("panel1");
        assert_eq!(panel.label(), Some("panel1"));
        assert_eq!(panel.area(), 2.1);
        assert_eq!(panel.efficiency(), 0.2);
        assert_eq!(panel.atmosphere(), &Atmosphere::standard());
    }

    #[test]
    fn test_unconfigured_panel() {
        let mut panel = SolarPanel::new(1.0, 0.3).unwrap();
        let err = panel.power().unwrap_err();
        assert_eq!(err, Error::panel_not_configured("orientation"));
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        panel.set_orientation(SurfaceOrientation::zenith());
        assert_eq!(
            panel.power().unwrap_err(),
            Error::panel_not_configured("position")
        );

        panel.set_position(GeoPosition::new(0.0, 0.0, 0.0).unwrap());
        assert_eq!(
            panel.irradiance().unwrap_err(),
            Error::panel_not_configured("date/time")
        );

        panel.set_datetime(Instant::new(2019, 1, 21, 12, 0).unwrap());
        assert!(panel.power().unwrap() > 0.0);
    }

    #[test]
    fn test_zero_efficiency() {
        let panel = configured(1.0, 0.0, 0.0, 0.0);
        assert!(panel.irradiance().unwrap() > 0.0);
        assert_eq!(panel.power().unwrap(), 0.0);
    }

    #[test]
    fn test_power_scales_irradiance() {
        let panel = configured(2.0, 0.25, 10.0, 0.0);
        let irradiance = panel.irradiance().unwrap();
        assert_eq!(panel.power().unwrap(), irradiance * 2.0 * 0.25);
    }

    #[test]
    fn test_upside_down() {
        let mut panel = configured(1.0, 0.3, 0.0, 0.0);
        panel.set_orientation(SurfaceOrientation::nadir());
        assert_eq!(panel.power().unwrap(), 0.0);
    }

    #[test]
    fn test_state_changes_are_picked_up() {
        let mut panel = configured(1.0, 0.3, 0.0, 0.0);
        let noon = panel.power().unwrap();

        panel.set_datetime(Instant::new(2019, 1, 21, 22, 15).unwrap());
        assert_eq!(panel.power().unwrap(), 0.0);

        panel.set_datetime(Instant::new(2019, 1, 21, 12, 0).unwrap());
        assert_eq!(panel.power().unwrap(), noon);
    }

    #[test]
    fn test_custom_atmosphere() {
        let clear = configured(1.0, 0.3, 0.0, 0.0);
        let hazy = clear
            .clone()
            .with_atmosphere(Atmosphere::standard().with_extinction(0.6).unwrap());
        assert!(hazy.power().unwrap() < clear.power().unwrap());
    }
}
