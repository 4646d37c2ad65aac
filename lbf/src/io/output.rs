use serde::{Deserialize, Serialize};

use rollpack::io::ext_repr::{ExtInstance, ExtPackingResult};

use crate::config::PackConfig;

/// Contents of a solution file: the instance, the selected packing and the configuration that produced it
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtPackingResult,
    pub config: PackConfig,
}
