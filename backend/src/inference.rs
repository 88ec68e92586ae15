use std::path::Path;

use serde::Serialize;
use tract_onnx::prelude::*;

use crate::models::FEATURE_DIM;

const MODEL_VERSION: &str = "1.0.0";

type RunnablePlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// The exported traffic pipeline: preprocessing plus the regressor,
/// optimized into a runnable tract plan at load time.
pub struct ModelPipeline {
    plan: RunnablePlan,
}

impl ModelPipeline {
    pub fn load<P: AsRef<Path>>(model_path: P) -> TractResult<Self> {
        let plan = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FEATURE_DIM)),
            )?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { plan })
    }

    /// Run one record through the pipeline. The output is the predicted
    /// hourly traffic volume, still fractional.
    pub fn predict(&self, features: &[f32; FEATURE_DIM]) -> TractResult<f32> {
        let input = Tensor::from_shape(&[1, FEATURE_DIM], features)?;
        let outputs = self.plan.run(tvec!(input.into()))?;

        let volume = *outputs[0]
            .to_array_view::<f32>()?
            .iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("model produced no output"))?;

        Ok(volume)
    }
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub loaded: bool,
    pub input_shape: Vec<usize>,
    pub version: &'static str,
    pub features: Vec<&'static str>,
}

pub fn model_info(loaded: bool) -> ModelInfo {
    ModelInfo {
        loaded,
        input_shape: vec![1, FEATURE_DIM],
        version: MODEL_VERSION,
        features: vec![
            "holiday",
            "temp",
            "rain_1h",
            "snow_1h",
            "clouds_all",
            "weather_main",
            "hour",
            "day_of_week",
            "month",
            "is_rush_hour",
        ],
    }
}
