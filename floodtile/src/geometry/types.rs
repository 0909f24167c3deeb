//! Feature and geometry type definitions

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::coord::Crs;

/// Attribute key consulted first for styling.
pub const SEVERITY_ATTR: &str = "severity";
/// Legacy attribute key consulted when `severity` is absent.
pub const SEVERITY_FALLBACK_ATTR: &str = "severity_level";
/// Severity assumed when a feature carries neither attribute.
pub const DEFAULT_SEVERITY: &str = "low";

/// A single x/y coordinate pair.
///
/// Units depend on context: degrees for geographic geometry, meters once
/// reprojected to Web Mercator, pixels once mapped onto a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A polygon as an exterior ring plus zero or more interior rings (holes).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub exterior: Vec<Coord>,
    pub interiors: Vec<Vec<Coord>>,
}

impl Polygon {
    pub fn new(exterior: Vec<Coord>, interiors: Vec<Vec<Coord>>) -> Self {
        Self { exterior, interiors }
    }

    /// A polygon without holes.
    pub fn solid(exterior: Vec<Coord>) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }
}

/// The closed set of geometry kinds the renderer understands.
///
/// Anything else in source data (GeometryCollection, unknown type tags) is
/// rejected per-feature at ingest time rather than shoehorned into one of
/// these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coord),
    MultiPoint(Vec<Coord>),
    LineString(Vec<Coord>),
    MultiLineString(Vec<Vec<Coord>>),
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// The GeoJSON-style name of this geometry's kind, for log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Axis-aligned envelope over every coordinate in the geometry.
    ///
    /// Returns `None` when the geometry holds no coordinates at all, so
    /// empty geometry can never pass a spatial filter.
    pub fn envelope(&self) -> Option<Envelope> {
        let mut env: Option<Envelope> = None;
        self.for_each_coord(&mut |c| match env.as_mut() {
            Some(e) => e.expand(c),
            None => env = Some(Envelope::of_point(c)),
        });
        env
    }

    fn for_each_coord(&self, visit: &mut dyn FnMut(Coord)) {
        match self {
            Geometry::Point(c) => visit(*c),
            Geometry::MultiPoint(points) => {
                for c in points {
                    visit(*c);
                }
            }
            Geometry::LineString(line) => {
                for c in line {
                    visit(*c);
                }
            }
            Geometry::MultiLineString(lines) => {
                for line in lines {
                    for c in line {
                        visit(*c);
                    }
                }
            }
            Geometry::Polygon(polygon) => visit_polygon(polygon, visit),
            Geometry::MultiPolygon(polygons) => {
                for polygon in polygons {
                    visit_polygon(polygon, visit);
                }
            }
        }
    }

    /// Produces a new geometry with every coordinate passed through `f`,
    /// preserving kind, ring structure and hole membership.
    pub fn map_coords<F: Fn(Coord) -> Coord>(&self, f: F) -> Geometry {
        let map_line = |line: &[Coord]| line.iter().map(|c| f(*c)).collect::<Vec<_>>();
        let map_polygon = |polygon: &Polygon| {
            Polygon::new(
                map_line(&polygon.exterior),
                polygon.interiors.iter().map(|r| map_line(r)).collect(),
            )
        };

        match self {
            Geometry::Point(c) => Geometry::Point(f(*c)),
            Geometry::MultiPoint(points) => Geometry::MultiPoint(map_line(points)),
            Geometry::LineString(line) => Geometry::LineString(map_line(line)),
            Geometry::MultiLineString(lines) => {
                Geometry::MultiLineString(lines.iter().map(|l| map_line(l)).collect())
            }
            Geometry::Polygon(polygon) => Geometry::Polygon(map_polygon(polygon)),
            Geometry::MultiPolygon(polygons) => {
                Geometry::MultiPolygon(polygons.iter().map(map_polygon).collect())
            }
        }
    }
}

fn visit_polygon(polygon: &Polygon, visit: &mut dyn FnMut(Coord)) {
    for c in &polygon.exterior {
        visit(*c);
    }
    for ring in &polygon.interiors {
        for c in ring {
            visit(*c);
        }
    }
}

/// Axis-aligned bounding box of a geometry, used for cheap intersection
/// tests during spatial filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Envelope {
    /// The degenerate envelope of a single point.
    #[inline]
    pub fn of_point(c: Coord) -> Self {
        Self {
            min_x: c.x,
            min_y: c.y,
            max_x: c.x,
            max_y: c.y,
        }
    }

    /// Grows the envelope to include `c`.
    #[inline]
    pub fn expand(&mut self, c: Coord) {
        self.min_x = self.min_x.min(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_x = self.max_x.max(c.x);
        self.max_y = self.max_y.max(c.y);
    }

    /// Closed-interval overlap test; touching edges count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Envelope) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}

/// A scalar attribute value carried by a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => write!(f, "{}", s),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// One geometry plus its source attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    geometry: Geometry,
    attributes: HashMap<String, AttrValue>,
}

impl Feature {
    pub fn new(geometry: Geometry, attributes: HashMap<String, AttrValue>) -> Self {
        Self {
            geometry,
            attributes,
        }
    }

    /// A feature with no attributes, styled at the default severity.
    pub fn bare(geometry: Geometry) -> Self {
        Self::new(geometry, HashMap::new())
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Looks up a named attribute.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Resolves the feature's severity for styling.
    ///
    /// Consults `severity`, then `severity_level`, and falls back to
    /// [`DEFAULT_SEVERITY`] when both are absent or empty. Non-text values
    /// are rendered to their textual form so the palette can judge them.
    pub fn severity(&self) -> Cow<'_, str> {
        for key in [SEVERITY_ATTR, SEVERITY_FALLBACK_ATTR] {
            match self.attributes.get(key) {
                Some(AttrValue::Text(s)) if !s.is_empty() => return Cow::Borrowed(s.as_str()),
                Some(AttrValue::Number(n)) => return Cow::Owned(n.to_string()),
                Some(AttrValue::Bool(b)) => return Cow::Owned(b.to_string()),
                _ => {}
            }
        }
        Cow::Borrowed(DEFAULT_SEVERITY)
    }
}

/// The full set of features loaded from one source, cached as a unit.
///
/// Immutable once constructed; the dataset cache hands it out behind an
/// `Arc` and concurrent renders read it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    source_id: String,
    crs: Crs,
    features: Vec<Feature>,
}

impl FeatureSet {
    pub fn new(source_id: impl Into<String>, crs: Crs, features: Vec<Feature>) -> Self {
        Self {
            source_id: source_id.into(),
            crs,
            features,
        }
    }

    /// The opaque dataset identifier this set was loaded from.
    #[inline]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// The coordinate reference the geometry is expressed in.
    #[inline]
    pub fn crs(&self) -> Crs {
        self.crs
    }

    /// Features in their original encounter order.
    #[inline]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, AttrValue)]) -> HashMap<String, AttrValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_envelope_of_line_string() {
        let geom = Geometry::LineString(vec![
            Coord::new(-3.0, 7.0),
            Coord::new(5.0, -2.0),
            Coord::new(1.0, 1.0),
        ]);

        let env = geom.envelope().unwrap();
        assert_eq!(env.min_x, -3.0);
        assert_eq!(env.max_x, 5.0);
        assert_eq!(env.min_y, -2.0);
        assert_eq!(env.max_y, 7.0);
    }

    #[test]
    fn test_envelope_covers_polygon_holes() {
        let polygon = Polygon::new(
            vec![
                Coord::new(0.0, 0.0),
                Coord::new(10.0, 0.0),
                Coord::new(10.0, 10.0),
                Coord::new(0.0, 10.0),
            ],
            vec![vec![
                Coord::new(2.0, 2.0),
                Coord::new(4.0, 2.0),
                Coord::new(4.0, 4.0),
            ]],
        );

        let env = Geometry::Polygon(polygon).envelope().unwrap();
        assert_eq!(env.min_x, 0.0);
        assert_eq!(env.max_x, 10.0);
    }

    #[test]
    fn test_empty_geometry_has_no_envelope() {
        assert!(Geometry::MultiPoint(Vec::new()).envelope().is_none());
        assert!(Geometry::LineString(Vec::new()).envelope().is_none());
    }

    #[test]
    fn test_envelope_intersection_includes_touching_edges() {
        let a = Envelope {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 1.0,
            max_y: 1.0,
        };
        let b = Envelope {
            min_x: 1.0,
            min_y: 0.0,
            max_x: 2.0,
            max_y: 1.0,
        };
        let c = Envelope {
            min_x: 1.1,
            min_y: 0.0,
            max_x: 2.0,
            max_y: 1.0,
        };

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_severity_prefers_primary_attribute() {
        let feature = Feature::new(
            Geometry::Point(Coord::new(0.0, 0.0)),
            attrs(&[
                ("severity", AttrValue::Text("high".into())),
                ("severity_level", AttrValue::Text("critical".into())),
            ]),
        );
        assert_eq!(feature.severity(), "high");
    }

    #[test]
    fn test_severity_falls_back_to_legacy_attribute() {
        let feature = Feature::new(
            Geometry::Point(Coord::new(0.0, 0.0)),
            attrs(&[("severity_level", AttrValue::Text("medium".into()))]),
        );
        assert_eq!(feature.severity(), "medium");
    }

    #[test]
    fn test_severity_defaults_when_absent_or_empty() {
        let bare = Feature::bare(Geometry::Point(Coord::new(0.0, 0.0)));
        assert_eq!(bare.severity(), DEFAULT_SEVERITY);

        let empty = Feature::new(
            Geometry::Point(Coord::new(0.0, 0.0)),
            attrs(&[("severity", AttrValue::Text(String::new()))]),
        );
        assert_eq!(empty.severity(), DEFAULT_SEVERITY);
    }

    #[test]
    fn test_severity_stringifies_non_text_values() {
        let feature = Feature::new(
            Geometry::Point(Coord::new(0.0, 0.0)),
            attrs(&[("severity", AttrValue::Number(3.0))]),
        );
        assert_eq!(feature.severity(), "3");
    }

    #[test]
    fn test_feature_set_preserves_order() {
        let set = FeatureSet::new(
            "test.geojson",
            Crs::Geographic,
            vec![
                Feature::bare(Geometry::Point(Coord::new(1.0, 0.0))),
                Feature::bare(Geometry::Point(Coord::new(2.0, 0.0))),
            ],
        );

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.features()[0].geometry(),
            &Geometry::Point(Coord::new(1.0, 0.0))
        );
    }
}
