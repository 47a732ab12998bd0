//! World topology loader
//!
//! The map view consumes a TopoJSON document such as `countries-110m.json`.
//! Only the named-feature skeleton matters here - one object holds a list
//! of geometries, each with a `properties.name` - the polygon arcs stay
//! with the rendering surface.

use std::collections::HashMap;

use serde::Deserialize;

use super::{load_text, SourceError, SourceResult};
use crate::dataset::GeoFeature;

#[derive(Deserialize)]
struct Topology {
    #[serde(default)]
    objects: HashMap<String, TopoObject>,
}

#[derive(Deserialize)]
struct TopoObject {
    #[serde(default)]
    geometries: Vec<TopoGeometry>,
}

#[derive(Deserialize)]
struct TopoGeometry {
    #[serde(default)]
    properties: Option<GeoProperties>,
}

#[derive(Deserialize)]
struct GeoProperties {
    name: Option<String>,
}

/// Load the named features of one topology object from a path or URL.
pub async fn load_features(
    client: &reqwest::Client,
    location: &str,
    object_key: &str,
) -> SourceResult<Vec<GeoFeature>> {
    let text = load_text(client, location).await?;
    let features = parse_features(&text, object_key)?;
    tracing::info!(location, features = features.len(), "topology loaded");
    Ok(features)
}

/// Extract the named features of `object_key`, in document order.
///
/// Geometries without a name property are skipped; a missing object key is
/// a shape error since the map cannot render without features.
pub fn parse_features(text: &str, object_key: &str) -> SourceResult<Vec<GeoFeature>> {
    let topology: Topology = serde_json::from_str(text)?;

    let object = topology.objects.get(object_key).ok_or_else(|| {
        SourceError::UnexpectedShape(format!("topology has no object named {object_key:?}"))
    })?;

    Ok(object
        .geometries
        .iter()
        .filter_map(|geometry| geometry.properties.as_ref()?.name.clone())
        .map(GeoFeature::new)
        .collect())
}
