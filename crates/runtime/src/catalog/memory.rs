use forge_content::{CatalogLoader, CatalogRecord, RecordNormalizer};
use forge_core::{ArmorPiece, Charm, Decoration, Equipment, NameOracle, Weapon};

use super::query::{ArmorQuery, Page, TextQuery, WeaponQuery, matches_text};
use super::{EquipmentCatalog, Result};

/// Catalog held entirely in memory, in load order.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    weapons: Vec<Weapon>,
    armor: Vec<ArmorPiece>,
    charms: Vec<Charm>,
    decorations: Vec<Decoration>,
}

impl InMemoryCatalog {
    pub fn new(equipment: impl IntoIterator<Item = Equipment>) -> Self {
        let mut catalog = Self::default();
        for item in equipment {
            catalog.insert(item);
        }
        catalog
    }

    /// Normalises raw records, skipping malformed ones with a warning.
    pub fn from_records(
        records: impl IntoIterator<Item = CatalogRecord>,
        names: &dyn NameOracle,
    ) -> Self {
        Self::new(CatalogLoader::normalize_all(
            records,
            &RecordNormalizer::new(names),
        ))
    }

    pub fn insert(&mut self, item: Equipment) {
        match item {
            Equipment::Weapon(weapon) => self.weapons.push(weapon),
            Equipment::Armor(piece) => self.armor.push(piece),
            Equipment::Charm(charm) => self.charms.push(charm),
            Equipment::Decoration(decoration) => self.decorations.push(decoration),
        }
    }

    pub fn len(&self) -> usize {
        self.weapons.len() + self.armor.len() + self.charms.len() + self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn weapon(&self, id: u32) -> Option<&Weapon> {
        self.weapons.iter().find(|weapon| weapon.id == id)
    }

    pub fn armor_piece(&self, id: u32) -> Option<&ArmorPiece> {
        self.armor.iter().find(|piece| piece.id == id)
    }

    pub fn charm(&self, id: u32) -> Option<&Charm> {
        self.charms.iter().find(|charm| charm.id == id)
    }

    pub fn decoration(&self, id: u32) -> Option<&Decoration> {
        self.decorations.iter().find(|decoration| decoration.id == id)
    }
}

fn filter_page<T: Clone>(
    items: &[T],
    offset: usize,
    limit: Option<usize>,
    keep: impl Fn(&T) -> bool,
) -> Page<T> {
    let matches = items.iter().filter(|item| keep(item)).cloned().collect();
    Page::paginate(matches, offset, limit)
}

impl EquipmentCatalog for InMemoryCatalog {
    fn weapons(&self, query: &WeaponQuery) -> Result<Page<Weapon>> {
        Ok(filter_page(&self.weapons, query.offset, query.limit, |weapon| {
            query.class.is_none_or(|class| weapon.class == class)
                && query.rank.is_none_or(|rank| weapon.rank == Some(rank))
                && query.element.is_none_or(|element| {
                    weapon
                        .element
                        .as_ref()
                        .is_some_and(|damage| damage.element == element)
                })
        }))
    }

    fn armor(&self, query: &ArmorQuery) -> Result<Page<ArmorPiece>> {
        Ok(filter_page(&self.armor, query.offset, query.limit, |piece| {
            query.slot.is_none_or(|slot| piece.slot == slot)
                && query.rank.is_none_or(|rank| piece.rank == Some(rank))
                && matches_text(&piece.name, query.search.as_deref())
        }))
    }

    fn decorations(&self, query: &TextQuery) -> Result<Page<Decoration>> {
        Ok(filter_page(
            &self.decorations,
            query.offset,
            query.limit,
            |decoration| matches_text(&decoration.name, query.search.as_deref()),
        ))
    }

    fn charms(&self, query: &TextQuery) -> Result<Page<Charm>> {
        Ok(filter_page(&self.charms, query.offset, query.limit, |charm| {
            matches_text(&charm.name, query.search.as_deref())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{ArmorSlot, Element, Rank, SkillRef, WeaponClass};

    fn catalog() -> InMemoryCatalog {
        let mut fire = Weapon::new(1, "Flame Blade", WeaponClass::LongSword, 990)
            .with_element(Element::Fire, 300.0);
        fire.rank = Some(Rank::Master);
        let plain = Weapon::new(2, "Iron Katana", WeaponClass::LongSword, 660);
        let bow = Weapon::new(3, "Hunter's Bow", WeaponClass::Bow, 240);

        let helm = ArmorPiece::new(10, "Brachydium Helm", ArmorSlot::Head);
        let mail = ArmorPiece::new(11, "Brachydium Mail", ArmorSlot::Chest);

        InMemoryCatalog::new([
            Equipment::Weapon(fire),
            Equipment::Weapon(plain),
            Equipment::Weapon(bow),
            Equipment::Armor(helm),
            Equipment::Armor(mail),
            Equipment::Charm(Charm::new(20, "Power Charm", vec![SkillRef::new("attack_boost", 3)])),
            Equipment::Decoration(Decoration::new(
                30,
                "Attack Jewel 1",
                1,
                SkillRef::new("attack_boost", 1),
            )),
        ])
    }

    #[test]
    fn weapons_filter_by_class_element_and_rank() {
        let catalog = catalog();

        let swords = catalog
            .weapons(&WeaponQuery {
                class: Some(WeaponClass::LongSword),
                ..WeaponQuery::default()
            })
            .unwrap();
        assert_eq!(swords.total, 2);

        let fire = catalog
            .weapons(&WeaponQuery {
                element: Some(Element::Fire),
                rank: Some(Rank::Master),
                ..WeaponQuery::default()
            })
            .unwrap();
        assert_eq!(fire.items.len(), 1);
        assert_eq!(fire.items[0].name, "Flame Blade");

        let paged = catalog
            .weapons(&WeaponQuery {
                limit: Some(1),
                offset: 1,
                ..WeaponQuery::default()
            })
            .unwrap();
        assert_eq!(paged.items[0].id, 2);
        assert_eq!(paged.total, 3);
    }

    #[test]
    fn armor_and_text_queries_search_names() {
        let catalog = catalog();

        let head = catalog
            .armor(&ArmorQuery {
                slot: Some(ArmorSlot::Head),
                search: Some("brachy".into()),
                ..ArmorQuery::default()
            })
            .unwrap();
        assert_eq!(head.items.len(), 1);

        assert_eq!(catalog.decorations(&TextQuery::search("ATTACK")).unwrap().total, 1);
        assert_eq!(catalog.charms(&TextQuery::search("critical")).unwrap().total, 0);
        assert_eq!(catalog.charms(&TextQuery::default()).unwrap().total, 1);
    }

    #[test]
    fn lookups_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.weapon(3).map(|weapon| weapon.class), Some(WeaponClass::Bow));
        assert!(catalog.armor_piece(11).is_some());
        assert!(catalog.charm(20).is_some());
        assert!(catalog.decoration(31).is_none());
    }
}
