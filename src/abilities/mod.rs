//! Catalogue mapping each racer archetype to its owned abilities. Names not
//! listed here simply race with an empty ability list.

pub mod banana;
pub mod blimp;
pub mod centaur;
pub mod coach;
pub mod gunk;
pub mod inchworm;
pub mod lackey;
pub mod legs;
pub mod lovable_loser;
pub mod romantic;
pub mod scoocher;
pub mod sisyphus;
pub mod stickler;

pub mod catalog {
    use crate::ability::Ability;
    use crate::types::RacerName;

    use super::*;

    /// Builds the ability list a fresh racer of `name` owns. Called once
    /// per racer at `Engine::new_engine` time.
    pub fn abilities_for(name: RacerName) -> Vec<Box<dyn Ability>> {
        match name {
            RacerName::Banana => vec![Box::new(banana::BananaTrip)],
            RacerName::Centaur => vec![Box::new(centaur::CentaurTrample)],
            RacerName::Romantic => vec![Box::new(romantic::RomanticMove)],
            RacerName::Scoocher => vec![Box::new(scoocher::ScoochStep)],
            RacerName::Blimp => vec![Box::new(blimp::BlimpModifierManager)],
            RacerName::Gunk => vec![Box::new(gunk::GunkSlimeManager)],
            RacerName::Coach => vec![Box::new(coach::CoachAuraManager)],
            RacerName::Sisyphus => vec![Box::new(sisyphus::SisyphusCurse)],
            RacerName::Stickler => vec![Box::new(stickler::StalwartManager)],
            RacerName::Legs => vec![Box::new(legs::LegsMove)],
            RacerName::Lackey => vec![Box::new(lackey::LackeyLoyalty)],
            RacerName::Inchworm => vec![Box::new(inchworm::InchwormCreep)],
            RacerName::LovableLoser => vec![Box::new(lovable_loser::LovableLoserBonus)],
            _ => Vec::new(),
        }
    }
}
