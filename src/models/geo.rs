use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// A GPS fix in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidCoordinates(format!(
                "{latitude},{longitude} is out of range"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Both or neither coordinate must be given on the command line.
    pub fn from_flags(lat: Option<f64>, lon: Option<f64>) -> AppResult<Option<Self>> {
        match (lat, lon) {
            (Some(a), Some(b)) => Ok(Some(Self::new(a, b)?)),
            (None, None) => Ok(None),
            _ => Err(AppError::InvalidCoordinates(
                "latitude and longitude must be given together".into(),
            )),
        }
    }

    /// Lenient read of stored cells: anything unparsable means "no fix".
    pub fn from_cells(lat: &str, lon: &str) -> Option<Self> {
        let a = lat.trim().parse::<f64>().ok()?;
        let b = lon.trim().parse::<f64>().ok()?;
        Self::new(a, b).ok()
    }

    pub fn map_link(&self) -> String {
        format!("https://maps.google.com/?q={},{}", self.latitude, self.longitude)
    }

    pub fn cells(point: Option<&GeoPoint>) -> (String, String) {
        match point {
            Some(p) => (p.latitude.to_string(), p.longitude.to_string()),
            None => (String::new(), String::new()),
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
