use serde::{Deserialize, Serialize};

use super::error::ContentError;
use super::size_class::{SizeClass, SizeProfile, COLOR_UNCLASSIFIED, PLANE_WIDTH};

/// Active size-class profiles, indexed by `SizeClass`
#[derive(Clone, Debug, PartialEq)]
pub struct SizeClassRegistry {
    profiles: [SizeProfile; 3],
}

impl Default for SizeClassRegistry {
    fn default() -> Self {
        Self::from_generated()
    }
}

impl SizeClassRegistry {
    /// Canonical small/medium/large profiles
    pub fn from_generated() -> Self {
        Self {
            profiles: SizeClass::ALL.map(SizeClass::canonical_profile),
        }
    }

    pub fn from_bundle_json(json: &str) -> Result<Self, ContentError> {
        let bundle: BundleRoot = serde_json::from_str(json)?;
        Self::from_bundle(bundle)
    }

    #[inline]
    pub fn profile(&self, class: SizeClass) -> &SizeProfile {
        &self.profiles[class.index()]
    }

    /// First class whose radius and mass both match within `PROFILE_EPSILON`
    pub fn classify(&self, radius: f64, mass: f64) -> Option<SizeClass> {
        SizeClass::ALL
            .into_iter()
            .find(|class| self.profile(*class).matches(radius, mass))
    }

    pub fn color_for(&self, radius: f64, mass: f64) -> u32 {
        self.classify(radius, mass)
            .map(|class| self.profile(class).color)
            .unwrap_or(COLOR_UNCLASSIFIED)
    }

    pub fn manifest_json(&self) -> String {
        let out = SizeClassManifest {
            format_version: 1,
            plane_width: PLANE_WIDTH,
            size_classes: SizeClass::ALL
                .iter()
                .map(|class| ManifestEntry {
                    key: class.key(),
                    id: *class as u8,
                    profile: *self.profile(*class),
                })
                .collect(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, ContentError> {
        let mut slots: [Option<SizeProfile>; 3] = [None; 3];

        for entry in bundle.size_classes.into_iter() {
            let class = SizeClass::from_key(&entry.key)
                .ok_or_else(|| ContentError::UnknownClass(entry.key.clone()))?;
            let slot = &mut slots[class.index()];
            if slot.is_some() {
                return Err(ContentError::DuplicateClass(entry.key));
            }

            let canonical = class.canonical_profile();
            let profile = SizeProfile {
                radius: entry.radius,
                mass: entry.mass,
                speed_scale: entry.speed_scale,
                color: entry.color.unwrap_or(canonical.color),
            };
            validate_profile(class, &profile)?;
            *slot = Some(profile);
        }

        let mut profiles = [SizeClass::Small.canonical_profile(); 3];
        for class in SizeClass::ALL {
            profiles[class.index()] =
                slots[class.index()].ok_or(ContentError::MissingClass(class.key()))?;
        }

        Ok(Self { profiles })
    }
}

fn validate_profile(class: SizeClass, p: &SizeProfile) -> Result<(), ContentError> {
    let invalid = |reason: &str| ContentError::InvalidProfile {
        class: class.key(),
        reason: reason.to_string(),
    };

    if !p.radius.is_finite() || p.radius <= 0.0 {
        return Err(invalid("radius must be finite and > 0"));
    }
    if !p.mass.is_finite() || p.mass <= 0.0 {
        return Err(invalid("mass must be finite and > 0"));
    }
    // Spawn positions are drawn from [radius, PLANE_WIDTH - radius].
    if 2.0 * p.radius >= PLANE_WIDTH {
        return Err(invalid("diameter must be smaller than the plane width"));
    }
    if !p.speed_scale.is_finite() || p.speed_scale < 0.0 {
        return Err(invalid("speedScale must be finite and >= 0"));
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SizeClassManifest {
    format_version: u32,
    plane_width: f64,
    size_classes: Vec<ManifestEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestEntry {
    key: &'static str,
    id: u8,
    #[serde(flatten)]
    profile: SizeProfile,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    #[serde(default)]
    #[allow(dead_code)]
    format_version: Option<u32>,
    size_classes: Vec<BundleSizeClass>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleSizeClass {
    key: String,
    radius: f64,
    mass: f64,
    speed_scale: f64,
    #[serde(default)]
    color: Option<u32>,
}
