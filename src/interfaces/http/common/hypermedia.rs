//! Hypermedia envelope for single-entity responses

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A navigational link. `type` is the HTTP method to use on `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type")]
    pub method: String,
}

impl Link {
    pub fn new(rel: &str, href: &str, method: &str) -> Self {
        Self {
            rel: rel.to_string(),
            href: href.to_string(),
            method: method.to_string(),
        }
    }
}

/// Entity data paired with the links that act on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HypermediaResponse<T> {
    pub data: T,
    pub links: Vec<Link>,
}

impl<T> HypermediaResponse<T> {
    /// Wrap `data`, the entity `id` of `collection` (e.g. `"hotels"`).
    pub fn new(collection: &str, id: i32, data: T) -> Self {
        Self {
            data,
            links: resource_links(collection, id),
        }
    }
}

/// `self`, `update` and `delete` links for `/{collection}/{id}`.
pub fn resource_links(collection: &str, id: i32) -> Vec<Link> {
    let href = format!("/{}/{}", collection, id);
    vec![
        Link::new("self", &href, "GET"),
        Link::new("update", &href, "PUT"),
        Link::new("delete", &href, "DELETE"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_point_at_the_resource() {
        let links = resource_links("rooms", 12);
        let rels: Vec<_> = links.iter().map(|l| (l.rel.as_str(), l.method.as_str())).collect();
        assert_eq!(rels, [("self", "GET"), ("update", "PUT"), ("delete", "DELETE")]);
        assert!(links.iter().all(|l| l.href == "/rooms/12"));
    }

    #[test]
    fn method_serializes_as_type() {
        let envelope = HypermediaResponse::new("hotels", 3, serde_json::json!({"ID": 3}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["data"]["ID"], 3);
        assert_eq!(
            value["links"][0],
            serde_json::json!({"rel": "self", "href": "/hotels/3", "type": "GET"})
        );
    }
}
