//! Task catalog: title and description per task id.
//!
//! Configuration data, not control flow. Ids in the "to be defined" set share
//! the placeholder title; ids absent from both fall back to `Tarea {n}`.

use std::borrow::Cow;

use crate::domain::TaskId;

pub const PENDING_DEFINITION: &str = "Tarea por definirse";

/// `(id, title, description)`
const ENTRIES: &[(u32, &str, &str)] = &[
    (12, "3.2.N.1", "Roadmap de PMO"),
    (13, "3.2.N.1.1", "3.2.N.1.1"),
    (14, "3.2.N.1.1.1", "3.2.N.1.1.1"),
    (15, "3.2.N.2", "3.2.N.2"),
    (20, "3.2.R.1", "3.2.R.1"),
    (21, "3.2.R.2", "3.2.R.2"),
    (22, "3.2.R.3", "3.2.R.3"),
    (23, "3.2.R.4.1", "3.2.R.4.1"),
    (24, "3.2.R.4.2", "3.2.R.4.2"),
    (25, "3.2.R.5", "3.2.R.5"),
    (26, "3.2.R.6", "3.2.R.6"),
    (30, "3.2.M.1", "Definiciones iniciales de producción"),
    (31, "3.2.M.2", "Estudio de tendencias gráficas"),
    (32, "3.2.M.3", "Estudio de tendencias gráficas"),
    (33, "3.2.M.3.1", "Desarrollo de identidad gráfica inicial"),
    (34, "3.2.M.3.2", "Desarrollo de parrilla inicial"),
    (35, "3.2.M.4", "Optimización y parrilla inicial (VF)"),
    (40, "3.2.P.1", "Definiciones iniciales de producción"),
    (41, "3.2.P.2", "Estudio de tendencias gráficas"),
    (42, "3.2.P.3", "Estudio de tendencias gráficas"),
    (43, "3.2.P.3.1", "Desarrollo de identidad gráfica inicial"),
    (44, "3.2.P.3.2", "Desarrollo de parrilla inicial"),
    (45, "3.2.P.4", "Optimización y parrilla inicial (VF)"),
    (53, "3.2.VO.1", "Kickoff y presentación"),
    (54, "3.2.VO.1.1", "3.2.VO.1.1"),
    (55, "3.2.VO.1.1.1", "Presentación de implantes"),
    (56, "3.2.VO.1.1.2", "Estudio de demografía digital"),
    (57, "3.2.VO.1.1.2.1", "Benchmark"),
    (58, "3.2.VO.1.1.2.1.1", "Estrategia digital consolidada"),
    (60, "3.2.VC.1", "Presentación de implantes"),
    (61, "3.2.VC.1.1", "Definiciones iniciales para el programa de acompañamiento"),
    (62, "3.2.VC.1.1.1", "Diseño del proceso de estrategia digital en sitio"),
    (63, "3.2.VC.1.1.1.1", "Recopilación de insights"),
    (64, "3.2.VC.1.1.2", "Diseño del sistema de levantamiento de imagen"),
    (65, "3.2.VC.1.1.2.1", "Diseño del sistema de comunicación instantánea"),
    (66, "3.2.VC.1.3", "Diseño del sistema de acompañamiento (playbook / reporte diario)"),
    (67, "3.2.VC.1.3.1", "Instalación de mesas"),
    (68, "3.2.VC.1.3.1.1", "Diseño de minuta"),
    (69, "3.2.VC.1.3.1.2", "Diseño de playbook"),
    (70, "3.2.VC.1.3.1.3", "Diseño de sistema de reportes"),
    (71, "3.2.VC.1.3.1.4", "Diseño de parrilla"),
    (72, "3.2.VC.2", "Definiciones iniciales para el programa de gerencia"),
    (73, "3.2.VC.2.1", "Diseño de organigrama, funciones, metas y participantes"),
    (74, "3.2.VC.2.2", "Diseño del proceso de gestión de desempeño"),
    (75, "3.2.VC.2.2.1", "Diseño del proceso de gestión de desempeño"),
    (76, "3.2.VC.2.2.2", "Procesos con áreas externas"),
    (77, "3.2.VC.3", "Diseño de presupuesto y flujo"),
    (78, "3.2.VC.3.1", "Sistema de acompañamiento"),
    (79, "3.2.VC.3.2", "Sistema de gerencia"),
    (82, PENDING_DEFINITION, "Diseño de parrilla"),
    (90, "3.2.A.1", "Estudios para la estrategia digital"),
    (91, "3.2.A.2.1", "Diseño estratégico y cuestionario"),
    (92, "3.2.A.2.2", "Definición y selección de proveedor de levantamiento"),
    (93, "3.2.A.2.3", "Recepción de base de levantamiento"),
    (94, "3.2.A.2.4", "Graficación / Visualización de datos"),
    (95, "3.2.A.2.5", "Graficación / Visualización de datos (encuesta basal)"),
    (96, "3.2.A.3", "Social listening base"),
    (97, "3.2.A.4", "Estudio de fórmulas de viralización"),
    (98, "3.2.A.5", "Evaluación de contenidos iniciales según estudios / estrategia"),
];

/// Title and description of one task, as shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    pub title: Cow<'static, str>,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct TaskCatalog {
    entries: &'static [(u32, &'static str, &'static str)],
}

impl TaskCatalog {
    pub fn standard() -> Self {
        Self { entries: ENTRIES }
    }

    pub fn info(&self, task: TaskId) -> TaskInfo {
        let n = task.get();
        if let Some((_, title, description)) = self.entries.iter().find(|(id, _, _)| *id == n) {
            return TaskInfo {
                title: Cow::Borrowed(title),
                description,
            };
        }
        if is_pending_definition(n) {
            return TaskInfo {
                title: Cow::Borrowed(PENDING_DEFINITION),
                description: PENDING_DEFINITION,
            };
        }
        TaskInfo {
            title: Cow::Owned(format!("Tarea {n}")),
            description: "",
        }
    }
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn is_pending_definition(n: u32) -> bool {
    matches!(n, 1..=11 | 16..=19 | 36..=39 | 59 | 80..=82 | 99..=101)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::sales(3, PENDING_DEFINITION)]
    #[case::ssc(12, "3.2.N.1")]
    #[case::management(58, "3.2.VO.1.1.2.1.1")]
    #[case::accompaniment(75, "3.2.VC.2.2.1")]
    #[case::eho(101, PENDING_DEFINITION)]
    #[case::unknown(83, "Tarea 83")]
    fn titles(#[case] task: u32, #[case] expected: &str) {
        assert_eq!(TaskCatalog::standard().info(TaskId::new(task)).title, expected);
    }

    #[test]
    fn described_tasks_carry_their_description() {
        let info = TaskCatalog::standard().info(TaskId::new(90));
        assert_eq!(info.description, "Estudios para la estrategia digital");
    }

    #[test]
    fn unknown_tasks_have_empty_description() {
        assert_eq!(TaskCatalog::standard().info(TaskId::new(500)).description, "");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<u32> = ENTRIES.iter().map(|(id, _, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ENTRIES.len());
    }
}
