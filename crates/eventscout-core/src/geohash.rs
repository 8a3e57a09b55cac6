//! Geohash encoding for location queries.
//!
//! A geohash interleaves longitude and latitude bisection bits (longitude
//! first) and packs them five at a time into the base-32 alphabet below.
//! Each extra character shrinks the cell by a factor of 32.
//!
//! Inputs outside the valid coordinate ranges, NaN coordinates, and a zero
//! precision are rejected rather than clamped. There is no upper bound on
//! precision; once the cell is narrower than `f64` can split, further
//! characters are still emitted but stop adding information.

use thiserror::Error;

/// Standard geohash alphabet: digits and lowercase letters without `a`, `i`, `l`, `o`.
pub const GEOHASH_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Precision used for the discovery API's `geoPoint` parameter.
pub const SEARCH_PRECISION: usize = 9;

const BITS_PER_CHAR: usize = 5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("geohash precision must be at least 1, got {0}")]
    InvalidPrecision(usize),

    #[error("invalid geohash character {0:?}")]
    InvalidCharacter(char),
}

/// Latitude/longitude extent of one geohash cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeohashBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeohashBounds {
    fn world() -> Self {
        Self {
            min_lat: -90.0,
            max_lat: 90.0,
            min_lng: -180.0,
            max_lng: 180.0,
        }
    }

    /// Whether the point lies inside the cell, edges included.
    #[must_use]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }

    /// Midpoint of the cell as `(lat, lng)`.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Encode a coordinate pair as a geohash of exactly `precision` characters.
///
/// # Errors
///
/// - [`GeohashError::InvalidPrecision`] if `precision` is 0.
/// - [`GeohashError::LatitudeOutOfRange`] / [`GeohashError::LongitudeOutOfRange`]
///   for NaN or out-of-range coordinates.
pub fn encode(lat: f64, lng: f64, precision: usize) -> Result<String, GeohashError> {
    if precision == 0 {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeohashError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(GeohashError::LongitudeOutOfRange(lng));
    }

    let mut bounds = GeohashBounds::world();
    let mut hash = String::with_capacity(precision);
    let mut even_bit = true;

    while hash.len() < precision {
        let mut index = 0usize;
        for _ in 0..BITS_PER_CHAR {
            let bit = if even_bit {
                bisect(&mut bounds.min_lng, &mut bounds.max_lng, lng)
            } else {
                bisect(&mut bounds.min_lat, &mut bounds.max_lat, lat)
            };
            index = (index << 1) | usize::from(bit);
            even_bit = !even_bit;
        }
        hash.push(char::from(GEOHASH_ALPHABET[index]));
    }

    Ok(hash)
}

/// Halve `[min, max]` around `value`, keeping the half that contains it.
/// Returns `true` when the upper half was kept.
fn bisect(min: &mut f64, max: &mut f64, value: f64) -> bool {
    let mid = (*min + *max) / 2.0;
    if value >= mid {
        *min = mid;
        true
    } else {
        *max = mid;
        false
    }
}

/// Decode a geohash into the bounds of the cell it names.
///
/// Accepts upper- or lowercase input.
///
/// # Errors
///
/// - [`GeohashError::InvalidPrecision`] for an empty hash.
/// - [`GeohashError::InvalidCharacter`] for a character outside the alphabet.
pub fn decode_bounds(hash: &str) -> Result<GeohashBounds, GeohashError> {
    if hash.is_empty() {
        return Err(GeohashError::InvalidPrecision(0));
    }

    let mut bounds = GeohashBounds::world();
    let mut even_bit = true;

    for c in hash.chars() {
        let lower = c.to_ascii_lowercase();
        let index = GEOHASH_ALPHABET
            .iter()
            .position(|&b| char::from(b) == lower)
            .ok_or(GeohashError::InvalidCharacter(c))?;

        for shift in (0..BITS_PER_CHAR).rev() {
            let upper = (index >> shift) & 1 == 1;
            let (min, max) = if even_bit {
                (&mut bounds.min_lng, &mut bounds.max_lng)
            } else {
                (&mut bounds.min_lat, &mut bounds.max_lat)
            };
            let mid = (*min + *max) / 2.0;
            if upper {
                *min = mid;
            } else {
                *max = mid;
            }
            even_bit = !even_bit;
        }
    }

    Ok(bounds)
}
