//! Static Metadata Resources
//!
//! The upstream API publishes game metadata as full-collection JSON dumps
//! only; there is no per-ID endpoint. This table names each collection, the
//! file it lives in, and the field that identifies records within it.

/// A static metadata collection exposed by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaResource {
    Descendants,
    Titles,
    Modules,
    Weapons,
    Stats,
    Patterns,
    Materials,
    Acquisition,
    Missions,
}

impl MetaResource {
    /// Upstream file name under the static metadata base URL.
    pub fn file_name(&self) -> &'static str {
        match self {
            MetaResource::Descendants => "descendant.json",
            MetaResource::Titles => "title.json",
            MetaResource::Modules => "module.json",
            MetaResource::Weapons => "weapon.json",
            MetaResource::Stats => "stat.json",
            MetaResource::Patterns => "pattern.json",
            MetaResource::Materials => "material.json",
            MetaResource::Acquisition => "acquisition.json",
            MetaResource::Missions => "mission.json",
        }
    }

    /// Name of the field that identifies a record within the collection.
    pub fn id_field(&self) -> &'static str {
        match self {
            MetaResource::Descendants => "descendant_id",
            MetaResource::Titles => "title_id",
            MetaResource::Modules => "module_id",
            MetaResource::Weapons => "weapon_id",
            MetaResource::Stats => "stat_id",
            MetaResource::Patterns => "pattern_id",
            MetaResource::Materials => "material_id",
            MetaResource::Acquisition => "acquisition_id",
            MetaResource::Missions => "mission_id",
        }
    }

    /// Human-readable entity name used in error messages.
    pub fn entity_name(&self) -> &'static str {
        match self {
            MetaResource::Descendants => "Descendant",
            MetaResource::Titles => "Title",
            MetaResource::Modules => "Module",
            MetaResource::Weapons => "Weapon",
            MetaResource::Stats => "Stat",
            MetaResource::Patterns => "Pattern",
            MetaResource::Materials => "Material",
            MetaResource::Acquisition => "Acquisition",
            MetaResource::Missions => "Mission",
        }
    }

    /// Cache key operation name for the full-collection fetch.
    pub fn cache_operation(&self) -> &'static str {
        match self {
            MetaResource::Descendants => "meta_descendants",
            MetaResource::Titles => "meta_titles",
            MetaResource::Modules => "meta_modules",
            MetaResource::Weapons => "meta_weapons",
            MetaResource::Stats => "meta_stats",
            MetaResource::Patterns => "meta_patterns",
            MetaResource::Materials => "meta_materials",
            MetaResource::Acquisition => "meta_acquisition",
            MetaResource::Missions => "meta_missions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MetaResource; 9] = [
        MetaResource::Descendants,
        MetaResource::Titles,
        MetaResource::Modules,
        MetaResource::Weapons,
        MetaResource::Stats,
        MetaResource::Patterns,
        MetaResource::Materials,
        MetaResource::Acquisition,
        MetaResource::Missions,
    ];

    #[test]
    fn test_file_names_are_json() {
        for resource in ALL {
            assert!(resource.file_name().ends_with(".json"));
        }
    }

    #[test]
    fn test_id_fields_follow_convention() {
        for resource in ALL {
            assert!(resource.id_field().ends_with("_id"));
        }
    }

    #[test]
    fn test_cache_operations_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for resource in ALL {
            assert!(seen.insert(resource.cache_operation()));
        }
    }
}
