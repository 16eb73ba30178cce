use clap::{Parser, ValueEnum};
use nutricoach_core::coach::ConsultRequest;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(
    name = "nutricoach",
    version,
    about = "Meal analysis and coaching powered by Gemini"
)]
pub struct Cli {
    /// Configuration file (defaults to config/nutricoach.toml)
    #[arg(long)]
    pub config: Option<String>,
    /// Override the configured model name
    #[arg(long)]
    pub model: Option<String>,
    /// Environment variable that holds the API key
    #[arg(long)]
    pub api_key_env: Option<String>,
    #[arg(long, value_enum, default_value_t = RunMode::Cli)]
    pub mode: RunMode,
    /// Overrides `[server] addr`
    #[arg(long)]
    pub rest_addr: Option<SocketAddr>,
    #[arg(long, default_value_t = 80.0)]
    pub weight: f64,
    #[arg(long, default_value_t = 180.0)]
    pub height: f64,
    #[arg(long, default_value_t = 35)]
    pub age: u32,
    #[arg(long, value_enum, default_value_t = SexArg::Male)]
    pub sex: SexArg,
    #[arg(long, value_enum, default_value_t = ActivityArg::Moderate)]
    pub activity: ActivityArg,
    #[arg(long, default_value = "Muscle Gain")]
    pub goal: String,
    /// Meal description; read from stdin when omitted
    #[arg()]
    pub meal: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    Cli,
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SexArg {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActivityArg {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl SexArg {
    fn label(self) -> &'static str {
        match self {
            SexArg::Male => "male",
            SexArg::Female => "female",
        }
    }
}

impl ActivityArg {
    fn label(self) -> &'static str {
        match self {
            ActivityArg::Sedentary => "sedentary",
            ActivityArg::Light => "light",
            ActivityArg::Moderate => "moderate",
            ActivityArg::Active => "active",
            ActivityArg::VeryActive => "very_active",
        }
    }
}

impl Cli {
    pub fn consult_request(&self, meal: String) -> ConsultRequest {
        ConsultRequest {
            meal,
            weight_kg: self.weight,
            height_cm: self.height,
            age: self.age,
            sex: self.sex.label().to_string(),
            activity_level: self.activity.label().to_string(),
            goal: self.goal.clone(),
        }
    }
}
