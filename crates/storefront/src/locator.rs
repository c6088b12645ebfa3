//! Partner-gym locator.
//!
//! Places the static gym list onto a 2D panel proportionally to real-world
//! coordinates. The mapping is a linear interpolation inside a fixed
//! Netherlands bounding box - a display transform, not a geographic
//! projection. That is acceptable only because the region is small and fixed;
//! there is no handling of the antimeridian, poles, or distance preservation.

use renew_rubber_core::{GymId, GymLocation};

/// Netherlands bounding box (approximate).
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// The fixed bounding box every marker is projected into.
pub const NL_BOUNDS: Bounds = Bounds {
    min_lat: 50.75,
    max_lat: 53.55,
    min_lng: 3.35,
    max_lng: 7.25,
};

/// Markers never render closer than this to the panel edge, in percent.
const EDGE_MARGIN: f64 = 2.0;

/// A marker position on the panel, in percent of panel size.
///
/// `x` grows eastward, `y` grows southward (north is up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPosition {
    pub x: f64,
    pub y: f64,
}

/// Project WGS84 coordinates onto the panel.
///
/// x is proportional to the longitude offset within the box, y inversely
/// proportional to the latitude offset. Both axes are clamped to
/// [2, 98] percent so markers never sit flush against the edge.
#[must_use]
pub fn project(lat: f64, lng: f64) -> PanelPosition {
    let x = (lng - NL_BOUNDS.min_lng) / (NL_BOUNDS.max_lng - NL_BOUNDS.min_lng) * 100.0;
    let y = (NL_BOUNDS.max_lat - lat) / (NL_BOUNDS.max_lat - NL_BOUNDS.min_lat) * 100.0;
    PanelPosition {
        x: x.clamp(EDGE_MARGIN, 100.0 - EDGE_MARGIN),
        y: y.clamp(EDGE_MARGIN, 100.0 - EDGE_MARGIN),
    }
}

/// All distinct regions with at least one gym, sorted.
#[must_use]
pub fn regions(gyms: &[GymLocation]) -> Vec<String> {
    let mut regions: Vec<String> = gyms.iter().map(|g| g.region.clone()).collect();
    regions.sort();
    regions.dedup();
    regions
}

/// Filter gyms on a case-insensitive name/city query and an exact region.
#[must_use]
pub fn filter_gyms<'a>(
    gyms: &'a [GymLocation],
    query: Option<&str>,
    region: Option<&str>,
) -> Vec<&'a GymLocation> {
    let query = query.map(str::to_lowercase).filter(|q| !q.is_empty());
    let region = region.filter(|r| !r.is_empty());

    gyms.iter()
        .filter(|gym| {
            let matches_query = query.as_deref().is_none_or(|q| {
                gym.name.to_lowercase().contains(q) || gym.city.to_lowercase().contains(q)
            });
            let matches_region = region.is_none_or(|r| gym.region == r);
            matches_query && matches_region
        })
        .collect()
}

fn gym(
    id: i32,
    name: &str,
    address: &str,
    city: &str,
    region: &str,
    lat: f64,
    lng: f64,
    phone: &str,
    website: Option<&str>,
    opening_hours: Option<&str>,
) -> GymLocation {
    GymLocation {
        id: GymId::new(id),
        name: name.to_owned(),
        address: address.to_owned(),
        city: city.to_owned(),
        region: region.to_owned(),
        lat,
        lng,
        phone: phone.to_owned(),
        website: website.map(str::to_owned),
        opening_hours: opening_hours.map(str::to_owned),
    }
}

/// The partner gyms where shoes can be dropped off and picked up.
#[must_use]
pub fn partner_gyms() -> Vec<GymLocation> {
    vec![
        gym(
            1,
            "Monk Bouldergym Amsterdam",
            "Gedempt Hamerkanaal 92",
            "Amsterdam",
            "Noord-Holland",
            52.3877,
            4.9200,
            "+31 20 737 0950",
            Some("https://monk.nl"),
            Some("Mon-Fri 10:00-23:00, Sat-Sun 10:00-21:00"),
        ),
        gym(
            2,
            "Klimhal Amsterdam",
            "Naritaweg 48",
            "Amsterdam",
            "Noord-Holland",
            52.3889,
            4.8372,
            "+31 20 681 0121",
            Some("https://klimhalamsterdam.nl"),
            Some("Mon-Fri 09:00-23:00, Sat-Sun 09:00-22:00"),
        ),
        gym(
            3,
            "Boulderhal Sterk - Utrecht",
            "Tractieweg 41",
            "Utrecht",
            "Utrecht",
            52.1107,
            5.0776,
            "+31 30 244 4919",
            Some("https://boulderhalsterk.nl"),
            Some("Daily 09:00-23:00"),
        ),
        gym(
            4,
            "El Capitan - Den Haag",
            "Saturnusstraat 9",
            "Den Haag",
            "Zuid-Holland",
            52.0672,
            4.3466,
            "+31 70 347 1655",
            Some("https://elcapitan.nl"),
            Some("Mon-Fri 10:00-23:00, Sat-Sun 10:00-20:00"),
        ),
        gym(
            5,
            "Boulderhal Energiehaven",
            "Tractieweg 183",
            "Utrecht",
            "Utrecht",
            52.1052,
            5.0699,
            "+31 30 227 3445",
            Some("https://energiehaven.nl"),
            None,
        ),
        gym(
            6,
            "Grip Nijmegen",
            "Winselingseweg 41",
            "Nijmegen",
            "Gelderland",
            51.8536,
            5.8266,
            "+31 24 388 0100",
            Some("https://gripnijmegen.nl"),
            Some("Daily 10:00-23:00"),
        ),
        gym(
            7,
            "Bouldergym Radium",
            "Kleine Berg 76",
            "Eindhoven",
            "Noord-Brabant",
            51.4362,
            5.4702,
            "+31 40 211 5940",
            None,
            Some("Mon-Fri 12:00-23:00, Sat-Sun 10:00-22:00"),
        ),
        gym(
            8,
            "Klimcentrum Bjoeks",
            "Kardingerplein 1",
            "Groningen",
            "Groningen",
            53.2406,
            6.6097,
            "+31 50 549 0449",
            Some("https://bjoeks.nl"),
            Some("Mon-Fri 10:00-23:00, Sat-Sun 10:00-20:00"),
        ),
        gym(
            9,
            "Boulderhal Zwolle",
            "Assendorperdijk 3",
            "Zwolle",
            "Overijssel",
            52.5055,
            6.1056,
            "+31 38 421 2195",
            None,
            None,
        ),
        gym(
            10,
            "Neoliet Rotterdam",
            "Van Helmontstraat 17",
            "Rotterdam",
            "Zuid-Holland",
            51.9279,
            4.5086,
            "+31 10 411 1850",
            Some("https://neoliet.nl"),
            Some("Daily 09:00-23:00"),
        ),
        gym(
            11,
            "Kunststof Klimcentrum Arnhem",
            "Westervoortsedijk 85",
            "Arnhem",
            "Gelderland",
            51.9744,
            5.9292,
            "+31 26 442 9404",
            None,
            Some("Mon-Fri 10:00-23:00"),
        ),
        gym(
            12,
            "Klimmuur Maastricht",
            "Sphinxcour 9",
            "Maastricht",
            "Limburg",
            50.8545,
            5.6890,
            "+31 43 325 0099",
            Some("https://klimmuurmaastricht.nl"),
            None,
        ),
    ]
}
