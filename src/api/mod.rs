mod chart_config;
mod chart_instance;
mod json_contract;
mod presenter;
mod presenter_config;
mod scene_builder;

pub use chart_config::{
    AnimationConfig, ChartConfig, DatasetStyle, PluginsConfig, TitleConfig, ValueAxisConfig,
};
pub use chart_instance::{ChartInstance, ChartInstanceHandle, InstanceId};
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
pub use presenter::ChartPresenter;
pub use presenter_config::PresenterConfig;
pub use scene_builder::build_chart_frame;
