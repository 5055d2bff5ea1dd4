//! Region generations and the reload-as-swap registry.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use gamedata_types::gameval::{is_equip, is_playable_servant};
use gamedata_types::{Region, StoreError};

use gamedata_store::{MemoryBackend, PointCache, RegionPack, RelationalStore};

use crate::adjacency::AdjacencyIndex;

/// Collection-number → primary-id aliases, resolved before any lookup.
#[derive(Debug, Default)]
pub struct IdAliases {
    servant_collection: HashMap<i32, i32>,
    equip_collection: HashMap<i32, i32>,
    cc_collection: HashMap<i32, i32>,
}

impl IdAliases {
    pub fn from_pack(pack: &RegionPack) -> Self {
        let mut aliases = Self::default();
        for svt in &pack.svts {
            if svt.collection_no <= 0 {
                continue;
            }
            if is_playable_servant(svt.svt_type) {
                aliases.servant_collection.insert(svt.collection_no, svt.id);
            } else if is_equip(svt.svt_type) {
                aliases.equip_collection.insert(svt.collection_no, svt.id);
            }
        }
        for cc in &pack.command_codes {
            if cc.collection_no > 0 {
                aliases.cc_collection.insert(cc.collection_no, cc.id);
            }
        }
        aliases
    }

    /// Resolve a servant or craft-essence collection number; unknown values
    /// pass through as primary ids.
    pub fn servant(&self, id: i32) -> i32 {
        self.servant_collection
            .get(&id)
            .or_else(|| self.equip_collection.get(&id))
            .copied()
            .unwrap_or(id)
    }

    pub fn command_code(&self, id: i32) -> i32 {
        self.cc_collection.get(&id).copied().unwrap_or(id)
    }
}

/// One immutable dataset generation for one region: both storage tiers, the
/// adjacency index, and the id aliases. Everything here is read-only; a
/// reload replaces the whole generation.
pub struct RegionGeneration {
    pub cache: Arc<dyn PointCache>,
    pub store: Arc<dyn RelationalStore>,
    pub adjacency: AdjacencyIndex,
    pub aliases: IdAliases,
}

impl RegionGeneration {
    /// Wrap externally-built tiers (e.g. the Postgres backend).
    pub fn new(
        cache: Arc<dyn PointCache>,
        store: Arc<dyn RelationalStore>,
        adjacency: AdjacencyIndex,
        aliases: IdAliases,
    ) -> Self {
        Self {
            cache,
            store,
            adjacency,
            aliases,
        }
    }

    /// Build a fully in-memory generation from a decoded pack.
    pub fn from_pack(region: Region, pack: &RegionPack) -> Result<Self, StoreError> {
        let mut backend = MemoryBackend::new();
        backend.load_region(region, pack)?;
        let backend = Arc::new(backend);
        let adjacency = AdjacencyIndex::build(pack);
        info!(
            %region,
            edges = adjacency.edge_count(),
            "built region generation"
        );
        Ok(Self {
            cache: backend.clone(),
            store: backend,
            adjacency,
            aliases: IdAliases::from_pack(pack),
        })
    }
}

/// Region → current generation. The only writer is the loader, which swaps
/// a complete generation atomically; readers hold an `Arc` for the duration
/// of one resolution call and never observe a half-updated index.
#[derive(Default)]
pub struct GenerationRegistry {
    inner: RwLock<HashMap<Region, Arc<RegionGeneration>>>,
}

impl GenerationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `generation` for `region`, returning the displaced one.
    pub async fn swap(
        &self,
        region: Region,
        generation: Arc<RegionGeneration>,
    ) -> Option<Arc<RegionGeneration>> {
        let displaced = self.inner.write().await.insert(region, generation);
        info!(%region, replaced = displaced.is_some(), "generation swapped");
        displaced
    }

    pub async fn get(&self, region: Region) -> Option<Arc<RegionGeneration>> {
        self.inner.read().await.get(&region).cloned()
    }

    pub async fn regions(&self) -> Vec<Region> {
        self.inner.read().await.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamedata_types::gameval::svt_type;
    use gamedata_types::rows::SvtRow;

    fn svt(id: i32, collection_no: i32, svt_type: i32) -> SvtRow {
        SvtRow {
            id,
            collection_no,
            name: String::new(),
            svt_type,
            flag: 0,
            class_id: 1,
            gender_type: 1,
            cost: 16,
            class_passive: vec![],
            card_ids: vec![],
            exp_type: 1,
            combine_skill_id: 1,
            combine_limit_id: 1,
            friendship_id: 1,
            cv_id: 1,
            illustrator_id: 1,
        }
    }

    #[test]
    fn collection_numbers_alias_to_primary_ids() {
        let mut pack = RegionPack::default();
        pack.svts = vec![
            svt(100100, 2, svt_type::NORMAL),
            svt(9400340, 2, svt_type::SERVANT_EQUIP),
        ];
        let aliases = IdAliases::from_pack(&pack);
        // servant collection wins over equip for the same number
        assert_eq!(aliases.servant(2), 100100);
        // primary ids pass through
        assert_eq!(aliases.servant(100100), 100100);
        assert_eq!(aliases.command_code(42), 42);
    }

    #[tokio::test]
    async fn swap_replaces_and_reports_displaced() {
        let registry = GenerationRegistry::new();
        let pack = RegionPack::default();
        let first = Arc::new(RegionGeneration::from_pack(Region::Jp, &pack).unwrap());
        let second = Arc::new(RegionGeneration::from_pack(Region::Jp, &pack).unwrap());

        assert!(registry.get(Region::Jp).await.is_none());
        assert!(registry.swap(Region::Jp, first.clone()).await.is_none());
        let displaced = registry.swap(Region::Jp, second.clone()).await.unwrap();
        assert!(Arc::ptr_eq(&displaced, &first));
        let current = registry.get(Region::Jp).await.unwrap();
        assert!(Arc::ptr_eq(&current, &second));
        assert_eq!(registry.regions().await, vec![Region::Jp]);
    }
}
