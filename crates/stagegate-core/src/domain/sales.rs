//! Sales stage records (the 8-step sales pointer).

use serde::{Deserialize, Serialize};

/// Number of sales stages; also the number of sales tasks that drive them.
pub const SALES_STAGE_COUNT: u8 = 8;

pub(crate) const SALES_STAGE_NAMES: [&str; SALES_STAGE_COUNT as usize] = [
    "Contacto Inicial",
    "Calificación",
    "Propuesta",
    "Negociación",
    "Documentación",
    "Revisión Legal",
    "Aprobación",
    "Cierre",
];

/// One step of the sales pipeline, persisted as `{id, name, completed, current}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesStage {
    pub id: u8,
    pub name: String,
    pub completed: bool,
    pub current: bool,
}

impl SalesStage {
    /// Initial pipeline: nothing completed, stage 1 current.
    pub fn initial() -> Vec<SalesStage> {
        SALES_STAGE_NAMES
            .iter()
            .zip(1u8..)
            .map(|(name, id)| SalesStage {
                id,
                name: (*name).to_string(),
                completed: false,
                current: id == 1,
            })
            .collect()
    }
}
