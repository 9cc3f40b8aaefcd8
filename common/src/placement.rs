//! Longitude wrapping and world-copy marker placement.
//!
//! Each hotel is placed three times, one world width apart, so a marker is already present when the
//! map jumps to an adjacent copy of the world. Nothing here depends on the viewport.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::hotel::HotelRecord;

pub const WORLD_WIDTH_DEG: f64 = 360.0;
const HALF_WORLD_DEG: f64 = 180.0;


/// Reduces a longitude into `(-180, 180]`.
///
/// Exact: the result differs from the input by an integer multiple of 360. Non-finite input is
/// returned unchanged.
pub fn normalize_longitude(lng: f64) -> f64 {
    if !lng.is_finite() {
        return lng;
    }
    // `%` is exact for floats and keeps the sign of `lng`, so the remainder is in (-360, 360)
    let wrapped = lng % WORLD_WIDTH_DEG;
    if wrapped > HALF_WORLD_DEG {
        wrapped - WORLD_WIDTH_DEG
    } else if wrapped <= -HALF_WORLD_DEG {
        wrapped + WORLD_WIDTH_DEG
    } else {
        wrapped
    }
}

/// Which copy of the world a marker is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorldCopy {
    West,
    Home,
    East,
}

impl WorldCopy {
    pub const ALL: [WorldCopy; 3] = [WorldCopy::West, WorldCopy::Home, WorldCopy::East];

    pub fn offset(self) -> i8 {
        match self {
            WorldCopy::West => -1,
            WorldCopy::Home => 0,
            WorldCopy::East => 1,
        }
    }

    pub fn shift_deg(self) -> f64 {
        f64::from(self.offset()) * WORLD_WIDTH_DEG
    }
}

/// Render identity: position in the filtered sequence plus the world copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerKey {
    pub filtered_index: usize,
    pub copy: WorldCopy,
}

impl Display for MarkerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.filtered_index, self.copy.offset())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedMarker<'a> {
    pub key: MarkerKey,
    pub hotel: &'a HotelRecord,
    pub lat: f64,
    pub lng: f64,
}

/// The three placements of the hotel at `filtered_index`: west, home, east.
pub fn placements(filtered_index: usize, hotel: &HotelRecord) -> [PlacedMarker<'_>; 3] {
    let wrapped_lng = normalize_longitude(hotel.lng);
    WorldCopy::ALL.map(|copy| PlacedMarker {
        key: MarkerKey { filtered_index, copy },
        hotel,
        lat: hotel.lat,
        lng: wrapped_lng + copy.shift_deg(),
    })
}

/// Placements for every filtered hotel, in order. Always three per hotel.
pub fn all_placements<'a>(filtered: &[&'a HotelRecord]) -> Vec<PlacedMarker<'a>> {
    let markers = filtered
        .iter()
        .enumerate()
        .flat_map(|(index, &hotel)| placements(index, hotel))
        .collect::<Vec<_>>();
    tracing::debug!("placed {} markers for {} hotels", markers.len(), filtered.len());
    markers
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn at(lat: f64, lng: f64) -> HotelRecord {
        HotelRecord { name: format!("{lat},{lng}"), lat, lng, ..Default::default() }
    }

    #[test]
    fn test_normalize_longitude_examples() {
        assert_eq!(normalize_longitude(200.0), -160.0);
        assert_eq!(normalize_longitude(-200.0), 160.0);
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(-180.0), 180.0);
        assert_eq!(normalize_longitude(540.0), 180.0);
        assert_eq!(normalize_longitude(720.0), 0.0);
        assert_eq!(normalize_longitude(54.434638), 54.434638);
        assert_eq!(normalize_longitude(-0.5), -0.5);
        assert_eq!(normalize_longitude(-1e-20), -1e-20);
        assert_eq!(normalize_longitude(1000.25), -79.75);
    }

    #[test]
    fn test_normalize_longitude_bound_and_exact_shift() {
        let inputs = [
            0.0, 179.999, 180.0, 180.001, -179.999, -180.0, -180.001, 359.5, -359.5, 360.0, -360.0,
            725.125, -725.125, 12345.678, -98765.4321, 1e9 + 0.5, -1e12,
        ];
        for lng in inputs {
            let wrapped = normalize_longitude(lng);
            assert!(wrapped > -180.0 && wrapped <= 180.0, "{lng} -> {wrapped}");
            let turns = (lng - wrapped) / WORLD_WIDTH_DEG;
            assert_eq!(turns, turns.round(), "{lng} -> {wrapped}");
        }
    }

    #[test]
    fn test_normalize_longitude_passes_non_finite_through() {
        assert!(normalize_longitude(f64::NAN).is_nan());
        assert_eq!(normalize_longitude(f64::INFINITY), f64::INFINITY);
        assert_eq!(normalize_longitude(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_placements_offset_the_wrapped_longitude() {
        let hotel = at(35.0, 200.0);
        let lngs = placements(0, &hotel).map(|m| m.lng);
        assert_eq!(lngs, [-520.0, -160.0, 200.0]);
        for marker in placements(0, &hotel) {
            assert_eq!(marker.lat, 35.0);
            assert!(std::ptr::eq(marker.hotel, &hotel));
        }
    }

    #[test]
    fn test_latitude_passes_through_unchecked() {
        let hotel = at(123.0, 10.0);
        assert!(placements(0, &hotel).iter().all(|m| m.lat == 123.0));
    }

    #[test]
    fn test_all_placements_triplicates_in_order() {
        let hotels = [at(1.0, 10.0), at(2.0, -190.0), at(3.0, 400.0)];
        let filtered = hotels.iter().collect::<Vec<_>>();
        let markers = all_placements(&filtered);
        assert_eq!(markers.len(), 3 * hotels.len());
        for (index, chunk) in markers.chunks(3).enumerate() {
            let wrapped = normalize_longitude(hotels[index].lng);
            let lngs = chunk.iter().map(|m| m.lng).collect::<Vec<_>>();
            assert_eq!(lngs, vec![wrapped - 360.0, wrapped, wrapped + 360.0]);
            assert!(chunk.iter().all(|m| m.key.filtered_index == index));
        }
    }

    #[test]
    fn test_marker_keys_are_unique_and_stable() {
        let hotels = [at(0.0, 0.0), at(0.0, 0.0), at(10.0, 20.0)];
        let filtered = hotels.iter().collect::<Vec<_>>();
        let first = all_placements(&filtered).iter().map(|m| m.key.to_string()).collect::<Vec<_>>();
        let second = all_placements(&filtered).iter().map(|m| m.key.to_string()).collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first.iter().collect::<HashSet<_>>().len(), first.len());
        assert_eq!(&first[..3], &["0--1", "0-0", "0-1"]);
    }

    #[test]
    fn test_no_hotels_no_markers() {
        assert!(all_placements(&[]).is_empty());
    }
}
