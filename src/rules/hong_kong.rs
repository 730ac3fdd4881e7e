//! Hong Kong (Cantonese) rules.
//!
//! 144 tiles, chi from the left neighbour only, peng and gang from anyone,
//! chicken hands allowed. Fan is capped (10 by default) when converted to
//! points.
//!
//! ## Factors
//!
//! | Factor | Fan |
//! |---|---|
//! | Self-draw | 1 |
//! | All triplets | 3 |
//! | Mixed one suit | 3 |
//! | Pure one suit | 7 (replaces mixed one suit) |
//! | All honors | 10 |
//! | Dragon triplet | 1 each |
//! | Seat wind, round wind | 1 each |
//! | Concealed hand, self-drawn | 1 |
//! | Last tile, win on gang, robbing a gang | 1 each |

use smallvec::SmallVec;

use super::ruleset::{CallPolicy, Ruleset};
use crate::hand::{Factor, ScoreBreakdown, ScoreSheet, TileCounts, WinContext};
use crate::tiles::{BonusKind, Dragon, Meld, MeldKind, Suit, Tile, TileInstance, Wind};

/// Copies of each non-bonus face in a standard set.
const COPIES_PER_FACE: u8 = 4;

/// The 144-tile set: 108 suited, 16 winds, 12 dragons, 8 bonus tiles.
#[must_use]
pub fn standard_tile_set() -> Vec<TileInstance> {
    let mut faces: Vec<Tile> = Vec::with_capacity(34);
    for suit in Suit::ALL {
        faces.extend((1..=9).map(|value| Tile::suited(suit, value)));
    }
    faces.extend(Wind::ALL.map(Tile::Wind));
    faces.extend(Dragon::ALL.map(Tile::Dragon));

    let mut tiles = Vec::with_capacity(144);
    for face in faces {
        tiles.extend((0..COPIES_PER_FACE).map(|copy| TileInstance::standard(face, copy)));
    }
    for number in 1..=4 {
        tiles.push(TileInstance::standard(Tile::bonus(BonusKind::Flower, number), 0));
        tiles.push(TileInstance::standard(Tile::bonus(BonusKind::Season, number), 0));
    }
    tiles
}

/// The Hong Kong ruleset.
#[derive(Clone, Debug)]
pub struct HongKongRuleset {
    fan_cap: u32,
}

impl Default for HongKongRuleset {
    fn default() -> Self {
        Self { fan_cap: 10 }
    }
}

impl HongKongRuleset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fan at which points stop doubling.
    pub fn with_fan_cap(mut self, fan_cap: u32) -> Self {
        self.fan_cap = fan_cap;
        self
    }

    #[must_use]
    pub fn fan_cap(&self) -> u32 {
        self.fan_cap
    }
}

impl Ruleset for HongKongRuleset {
    fn id(&self) -> &str {
        "hongkong"
    }

    fn name(&self) -> &str {
        "Hong Kong (Cantonese)"
    }

    fn generate_tile_set(&self) -> Vec<TileInstance> {
        standard_tile_set()
    }

    fn call_policy(&self) -> CallPolicy {
        CallPolicy {
            allow_chi: true,
            chi_from_left_only: true,
            allow_peng: true,
            allow_gang: true,
        }
    }

    fn score_hand(&self, hand: &[TileInstance], melds: &[Meld], context: &WinContext) -> ScoreBreakdown {
        let all_faces: Vec<Tile> = hand
            .iter()
            .chain(melds.iter().flat_map(|m| m.tiles.iter()))
            .map(|t| t.tile)
            .collect();
        let mut sheet = ScoreSheet::new();

        if context.self_drawn {
            sheet.award(Factor::SelfDraw, 1);
        }

        if melds.iter().all(|m| m.kind.is_triplet_like()) && is_triplets_and_pair(hand) {
            sheet.award(Factor::AllTriplets, 3);
        }

        let suits: SmallVec<[Suit; 3]> = distinct_suits(&all_faces);
        let has_honors = all_faces.iter().any(|t| t.is_honor());
        if suits.len() == 1 && has_honors {
            sheet.award(Factor::MixedOneSuit, 3);
        }
        if suits.len() == 1 && !has_honors {
            sheet.retract(Factor::MixedOneSuit);
            sheet.award(Factor::PureOneSuit, 7);
        }

        if all_faces.iter().all(|t| t.is_honor()) {
            sheet.award(Factor::AllHonors, 10);
        }

        for face in melds.iter().filter_map(Meld::exposed_triplet_face) {
            match face {
                Tile::Dragon(dragon) => sheet.award(Factor::DragonTriplet(dragon), 1),
                Tile::Wind(wind) => {
                    if wind == context.seat_wind {
                        sheet.award(Factor::SeatWind, 1);
                    }
                    if wind == context.round_wind {
                        sheet.award(Factor::RoundWind, 1);
                    }
                }
                Tile::Suited { .. } | Tile::Bonus { .. } => {}
            }
        }

        let concealed = melds.iter().all(|m| m.kind == MeldKind::ConcealedGang);
        if concealed && context.self_drawn {
            sheet.award(Factor::ConcealedSelfDraw, 1);
        }

        if context.last_tile {
            sheet.award(Factor::LastTile, 1);
        }
        if context.replacement_tile {
            sheet.award(Factor::ReplacementTile, 1);
        }
        if context.robbing_gang {
            sheet.award(Factor::RobbingGang, 1);
        }

        sheet.finish(self.fan_cap)
    }
}

/// Concealed tiles are triplets plus exactly one pair.
fn is_triplets_and_pair(hand: &[TileInstance]) -> bool {
    let Some(counts) = TileCounts::from_instances(hand) else {
        return false;
    };
    let mut pairs = 0;
    for (_, count) in counts.iter() {
        match count {
            2 => pairs += 1,
            3 => {}
            _ => return false,
        }
    }
    pairs == 1
}

fn distinct_suits(faces: &[Tile]) -> SmallVec<[Suit; 3]> {
    let mut suits = SmallVec::new();
    for suit in faces.iter().filter_map(|t| t.suit()) {
        if !suits.contains(&suit) {
            suits.push(suit);
        }
    }
    suits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Seat;
    use rustc_hash::FxHashSet;

    fn tiles(faces: &[Tile]) -> Vec<TileInstance> {
        let mut seen: Vec<Tile> = Vec::new();
        faces
            .iter()
            .map(|&face| {
                let copy = seen.iter().filter(|&&f| f == face).count() as u8;
                seen.push(face);
                TileInstance::standard(face, copy)
            })
            .collect()
    }

    fn dots(values: &[u8]) -> Vec<Tile> {
        values.iter().map(|&v| Tile::suited(Suit::Dots, v)).collect()
    }

    fn exposed(kind: MeldKind, face: Tile) -> Meld {
        let tiles = (0..kind.tile_count() as u8)
            .map(|c| TileInstance::standard(face, c))
            .collect();
        let from = (kind != MeldKind::ConcealedGang).then_some(Seat::SOUTH);
        Meld::new(kind, tiles, from)
    }

    fn context(hand: &[TileInstance], self_drawn: bool) -> WinContext {
        let winning = hand[hand.len() - 1].clone();
        if self_drawn {
            WinContext::self_drawn(winning, Wind::East, Wind::East)
        } else {
            WinContext::on_discard(winning, Wind::East, Wind::East)
        }
    }

    #[test]
    fn test_tile_set_composition() {
        let set = standard_tile_set();
        assert_eq!(set.len(), 144);

        let ids: FxHashSet<_> = set.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 144);
        assert_eq!(set.iter().filter(|t| t.tile.is_bonus()).count(), 8);
        assert_eq!(set.iter().filter(|t| t.tile.suit().is_some()).count(), 108);
        assert_eq!(set.iter().filter(|t| matches!(t.tile, Tile::Wind(_))).count(), 16);
        assert_eq!(set.iter().filter(|t| matches!(t.tile, Tile::Dragon(_))).count(), 12);
    }

    #[test]
    fn test_call_policy() {
        let policy = HongKongRuleset::new().call_policy();
        assert!(policy.allow_chi && policy.chi_from_left_only);
        assert!(policy.allow_peng && policy.allow_gang);
        assert_eq!(HongKongRuleset::new().minimum_fan(), 0);
    }

    #[test]
    fn test_pure_triplets_self_drawn() {
        let hand = tiles(&dots(&[1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5]));
        let ruleset = HongKongRuleset::new();
        let ctx = context(&hand, true);
        assert!(ruleset.is_winning_hand(&hand, &[], &ctx));

        let result = ruleset.score_hand(&hand, &[], &ctx);
        assert!(result.has(Factor::SelfDraw));
        assert!(result.has(Factor::AllTriplets));
        assert!(result.has(Factor::PureOneSuit));
        assert!(result.has(Factor::ConcealedSelfDraw));
        assert!(!result.has(Factor::MixedOneSuit));
        assert_eq!(result.fan, 12);
        assert_eq!(result.total_points, 1024);
        assert_eq!(result.base_points, result.total_points);
    }

    #[test]
    fn test_mixed_one_suit() {
        let mut faces = dots(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        faces.extend([Tile::Wind(Wind::West); 3]);
        faces.extend([Tile::Dragon(Dragon::White); 2]);
        let hand = tiles(&faces);

        let result = HongKongRuleset::new().score_hand(&hand, &[], &context(&hand, false));
        assert!(result.has(Factor::MixedOneSuit));
        assert!(!result.has(Factor::PureOneSuit));
        assert_eq!(result.fan, 3);
    }

    #[test]
    fn test_chicken_hand() {
        let mut faces = dots(&[1, 2, 3, 4, 5, 6]);
        faces.extend([2, 3, 4].map(|v| Tile::suited(Suit::Bamboo, v)));
        faces.extend([7, 8, 9].map(|v| Tile::suited(Suit::Characters, v)));
        faces.extend([Tile::Wind(Wind::North); 2]);
        let hand = tiles(&faces);

        let result = HongKongRuleset::new().score_hand(&hand, &[], &context(&hand, false));
        assert_eq!(result.fan, 0);
        assert_eq!(result.total_points, 1);
        assert_eq!(result.items.len(), 1);
        assert!(result.has(Factor::ChickenHand));
    }

    #[test]
    fn test_honor_melds() {
        let melds = vec![
            exposed(MeldKind::Peng, Tile::Dragon(Dragon::Red)),
            exposed(MeldKind::Gang, Tile::Wind(Wind::East)),
        ];
        let mut faces = dots(&[1, 2, 3]);
        faces.extend([2, 3, 4].map(|v| Tile::suited(Suit::Bamboo, v)));
        faces.extend([Tile::suited(Suit::Characters, 5); 2]);
        let hand = tiles(&faces);

        // East seat in the East round: the wind gang scores twice.
        let result = HongKongRuleset::new().score_hand(&hand, &melds, &context(&hand, false));
        assert!(result.has(Factor::DragonTriplet(Dragon::Red)));
        assert!(result.has(Factor::SeatWind));
        assert!(result.has(Factor::RoundWind));
        assert_eq!(result.fan, 3);
    }

    #[test]
    fn test_concealed_gang_keeps_hand_concealed() {
        let melds = vec![exposed(MeldKind::ConcealedGang, Tile::Dragon(Dragon::Green))];
        let mut faces = dots(&[1, 2, 3]);
        faces.extend([4, 5, 6].map(|v| Tile::suited(Suit::Bamboo, v)));
        faces.extend([7, 8, 9].map(|v| Tile::suited(Suit::Characters, v)));
        faces.extend([Tile::Wind(Wind::South); 2]);
        let hand = tiles(&faces);

        let result = HongKongRuleset::new().score_hand(&hand, &melds, &context(&hand, true));
        assert!(result.has(Factor::ConcealedSelfDraw));
        // Concealed gangs are not counted as dragon triplets.
        assert!(!result.has(Factor::DragonTriplet(Dragon::Green)));
        assert_eq!(result.fan, 2);
    }

    #[test]
    fn test_all_honors() {
        let mut faces = vec![Tile::Wind(Wind::East); 3];
        faces.extend([Tile::Wind(Wind::South); 3]);
        faces.extend([Tile::Dragon(Dragon::Red); 3]);
        faces.extend([Tile::Dragon(Dragon::White); 3]);
        faces.extend([Tile::Wind(Wind::North); 2]);
        let hand = tiles(&faces);

        let ruleset = HongKongRuleset::new();
        let result = ruleset.score_hand(&hand, &[], &context(&hand, false));
        assert!(result.has(Factor::AllHonors));
        assert!(result.has(Factor::AllTriplets));
        assert!(!result.has(Factor::MixedOneSuit));
        assert_eq!(result.fan, 13);
        assert_eq!(result.total_points, 1024);

        let uncapped = ruleset.with_fan_cap(13).score_hand(&hand, &[], &context(&hand, false));
        assert_eq!(uncapped.total_points, 8192);
    }

    #[test]
    fn test_context_flags() {
        let mut faces = dots(&[1, 2, 3, 4, 5, 6]);
        faces.extend([2, 3, 4].map(|v| Tile::suited(Suit::Bamboo, v)));
        faces.extend([7, 8, 9].map(|v| Tile::suited(Suit::Characters, v)));
        faces.extend([Tile::Wind(Wind::North); 2]);
        let hand = tiles(&faces);

        let ctx = context(&hand, false)
            .with_last_tile(true)
            .with_replacement_tile(true)
            .with_robbing_gang(true);
        let result = HongKongRuleset::new().score_hand(&hand, &[], &ctx);
        assert!(result.has(Factor::LastTile));
        assert!(result.has(Factor::ReplacementTile));
        assert!(result.has(Factor::RobbingGang));
        assert_eq!(result.fan, 3);
    }
}
