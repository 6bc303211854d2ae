//! Production layout of the stage matrix.

use super::{RegistryBuilder, TaskCatalog, TaskRegistry};
use crate::domain::PipelineStage::{Acquisition, Development, Eho, Presentation};
use crate::domain::Role;

/// Shared EHO task present in every row.
const EHO_TASK: u32 = 101;

pub(super) fn build() -> TaskRegistry {
    let mut builder = RegistryBuilder::default()
        .range(Role::AlphaSales, Acquisition, 1, 9)
        .range(Role::AlphaSales, Development, 11, 11)
        .range(Role::AlphaSsc, Acquisition, 10, 10)
        .range(Role::AlphaSsc, Development, 12, 18)
        .range(Role::AlphaSsc, Presentation, 19, 19)
        .range(Role::EsporaStrategy, Development, 20, 26)
        .range(Role::EsporaDiffusion, Development, 30, 39)
        .range(Role::EsporaProduction, Development, 40, 45)
        .range(Role::EsporaManagement, Development, 53, 58)
        .range(Role::EsporaManagement, Presentation, 59, 59)
        .range(Role::EsporaAccompaniment, Development, 60, 83)
        .range(Role::TestankStudies, Development, 90, 99)
        .range(Role::TestankStudies, Presentation, 100, 100);

    for role in Role::ROWS {
        builder = builder.range(role, Eho, EHO_TASK, EHO_TASK);
    }

    builder
        // alpha-sales
        .chain(1, 9)
        .depends_on(11, &[9])
        // alpha-ssc
        .chain(12, 19)
        // espora-strategy
        .chain(20, 26)
        // espora-diffusion
        .chain(30, 39)
        // espora-production
        .chain(40, 45)
        // espora-management
        .chain(53, 59)
        // espora-accompaniment, two rows
        .chain(60, 70)
        .depends_on(82, &[70])
        .chain(71, 81)
        .depends_on(83, &[81])
        // testank-studies
        .chain(90, 100)
        .catalog(TaskCatalog::standard())
        .build()
}
