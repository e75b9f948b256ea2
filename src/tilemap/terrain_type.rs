//! # Terrain Types
//!
//! Terrain layers packed into an RGBA4 mask, one nibble per layer. A tile's
//! u16 mask records every layer painted on it; display resolves the top
//! layer by fixed precedence (road over water over dirt over secondary).

use serde::{Deserialize, Serialize};

/// A terrain layer with its RGBA4 nibble mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    /// Unresolvable mask state
    Invalid,
    /// The base layer; mask with no bits set
    Primary,
    /// Red channel
    Secondary,
    /// Green channel
    Dirt,
    /// Blue channel
    Water,
    /// Alpha channel
    Road,
}

impl TerrainType {
    /// The paintable layers, bottom-most first.
    pub const LAYERS: [TerrainType; 5] = [
        TerrainType::Primary,
        TerrainType::Secondary,
        TerrainType::Dirt,
        TerrainType::Water,
        TerrainType::Road,
    ];

    /// The RGBA4 nibble mask of this layer.
    pub fn rgba4(self) -> u16 {
        match self {
            TerrainType::Invalid => 0x1111,
            TerrainType::Primary => 0x0000,
            TerrainType::Secondary => 0xF000,
            TerrainType::Dirt => 0x0F00,
            TerrainType::Water => 0x00F0,
            TerrainType::Road => 0x000F,
        }
    }

    /// The mask channel this layer occupies.
    pub fn channel(self) -> &'static str {
        match self {
            TerrainType::Invalid => "INVALID",
            TerrainType::Primary => "CLEAR",
            TerrainType::Secondary => "RED",
            TerrainType::Dirt => "GREEN",
            TerrainType::Water => "BLUE",
            TerrainType::Road => "ALPHA",
        }
    }

    /// Resolves the visible layer of a tile mask by precedence:
    /// road, then water, dirt, secondary; an empty mask is primary.
    pub fn top_layer(mask: u16) -> TerrainType {
        if mask == TerrainType::Primary.rgba4() {
            return TerrainType::Primary;
        }
        for layer in [
            TerrainType::Road,
            TerrainType::Water,
            TerrainType::Dirt,
            TerrainType::Secondary,
        ] {
            if Self::contains(mask, layer) {
                return layer;
            }
        }
        TerrainType::Invalid
    }

    /// True if every bit of `layer`'s nibble is set in `mask`.
    pub fn contains(mask: u16, layer: TerrainType) -> bool {
        (mask & layer.rgba4()) == layer.rgba4()
    }

    /// True for the empty (base) mask.
    pub fn is_primary(mask: u16) -> bool {
        mask == TerrainType::Primary.rgba4()
    }

    /// True when secondary is the visible layer (nothing painted above it).
    pub fn is_secondary(mask: u16) -> bool {
        Self::top_layer(mask) == TerrainType::Secondary
    }

    /// True when the dirt nibble is set, ignoring layers above it.
    pub fn is_dirt(mask: u16) -> bool {
        ((mask | 0x00FF) & TerrainType::Dirt.rgba4()) == TerrainType::Dirt.rgba4()
    }

    /// True when the road nibble is set.
    pub fn is_road(mask: u16) -> bool {
        Self::contains(mask, TerrainType::Road)
    }

    /// True when water is the visible wet layer (road covers water).
    pub fn is_water(mask: u16) -> bool {
        !Self::is_road(mask) && Self::contains(mask, TerrainType::Water)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_layer_precedence() {
        assert_eq!(TerrainType::top_layer(0x0000), TerrainType::Primary);
        assert_eq!(TerrainType::top_layer(0xF000), TerrainType::Secondary);
        assert_eq!(TerrainType::top_layer(0xFF00), TerrainType::Dirt);
        assert_eq!(TerrainType::top_layer(0xFFF0), TerrainType::Water);
        assert_eq!(TerrainType::top_layer(0xFFFF), TerrainType::Road);
        assert_eq!(TerrainType::top_layer(0x000F), TerrainType::Road);
        // partial nibbles resolve nothing
        assert_eq!(TerrainType::top_layer(0x1111), TerrainType::Invalid);
    }

    #[test]
    fn mask_predicates() {
        assert!(TerrainType::is_primary(0x0000));
        assert!(!TerrainType::is_primary(0x000F));

        assert!(TerrainType::is_secondary(0xF000));
        assert!(!TerrainType::is_secondary(0xFF00));
        assert!(!TerrainType::is_secondary(0xF00F));
        assert!(!TerrainType::is_secondary(0x0000));

        assert!(TerrainType::is_dirt(0x0F00));
        assert!(TerrainType::is_dirt(0xFF00));
        assert!(!TerrainType::is_dirt(0xF000));

        assert!(TerrainType::is_road(0x000F));
        assert!(TerrainType::is_water(0x00F0));
        // road hides water
        assert!(!TerrainType::is_water(0x00FF));
    }

    #[test]
    fn contains_requires_full_nibble() {
        assert!(TerrainType::contains(0x0FF0, TerrainType::Water));
        assert!(!TerrainType::contains(0x0010, TerrainType::Water));
    }
}
