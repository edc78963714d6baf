//! Services module
//!
//! Este módulo contiene el núcleo de cálculo de analytics: funciones puras
//! y sin estado sobre snapshots ya traídos del backend de flota. Ningún
//! servicio lee estado global ni hace I/O; los llamadores son dueños del
//! fetch y de la configuración.

pub mod aggregation_service;
pub mod cost_service;
pub mod criticality_service;
pub mod inspection_service;
pub mod lifecycle_service;
pub mod vehicle_search_service;
pub mod wear_service;
