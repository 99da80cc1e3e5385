pub const MAX_ZOOM: f64 = 19.0;

/// Base tile layers of the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BaseLayer {
    #[default]
    Minimal,
    Satellite,
}

impl BaseLayer {
    pub const ALL: [Self; 2] = [Self::Minimal, Self::Satellite];

    #[must_use]
    pub const fn tile_url(self) -> &'static str {
        match self {
            Self::Minimal => {
                "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png"
            }
            Self::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
        }
    }

    #[must_use]
    pub const fn attribution(self) -> &'static str {
        match self {
            Self::Minimal => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
            Self::Satellite => {
                "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community"
            }
        }
    }

    #[must_use]
    pub const fn max_zoom(self) -> f64 {
        MAX_ZOOM
    }

    /// Fill color of location markers drawn on top of this layer.
    #[must_use]
    pub const fn marker_color(self) -> &'static str {
        match self {
            Self::Minimal => "#000000",
            Self::Satellite => "#ffd1dc",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Satellite => "Satellite",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Minimal => "Clean, minimal style map",
            Self::Satellite => "Detailed satellite imagery",
        }
    }
}
