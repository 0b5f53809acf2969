//! Genetic algorithm configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::evaluation::FitnessParams;

/// Parameters of one optimization run.
///
/// Fixed for the duration of a run. Defaults reproduce the reference
/// setup: 80 individuals, 100 generations, crossover 0.9, mutation 0.2,
/// tournaments of 3.
///
/// # Examples
///
/// ```
/// use u_itinerary::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_max_generations(25)
///     .with_seed(7);
/// assert_eq!(config.population_size, 40);
/// assert_eq!(config.tournament_size, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    pub population_size: usize,
    pub max_generations: usize,
    /// Probability that two parents are recombined rather than copied.
    pub crossover_rate: f64,
    /// Probability that an offspring receives a swap mutation.
    pub mutation_rate: f64,
    pub tournament_size: usize,
    /// Emit a progress observation every this many generations (0 = only the last).
    pub report_interval: usize,
    /// Seed for the run's random number generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub fitness: FitnessParams,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 80,
            max_generations: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.2,
            tournament_size: 3,
            report_interval: 10,
            seed: None,
            fitness: FitnessParams::default(),
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_report_interval(mut self, interval: usize) -> Self {
        self.report_interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fitness(mut self, fitness: FitnessParams) -> Self {
        self.fitness = fitness;
        self
    }

    /// Rejects configurations that cannot drive a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::InvalidTournamentSize {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        ConfigError::rate("crossover_rate", self.crossover_rate)?;
        ConfigError::rate("mutation_rate", self.mutation_rate)?;
        self.fitness.validate()
    }

    /// Whether `generation` should emit a progress observation.
    pub(crate) fn is_report_generation(&self, generation: usize) -> bool {
        generation == 0
            || generation == self.max_generations
            || (self.report_interval > 0 && generation % self.report_interval == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GaConfig::default();
        assert_eq!(c.population_size, 80);
        assert_eq!(c.max_generations, 100);
        assert_eq!(c.crossover_rate, 0.9);
        assert_eq!(c.mutation_rate, 0.2);
        assert_eq!(c.tournament_size, 3);
        assert!(c.seed.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_zero_population() {
        let c = GaConfig::default().with_population_size(0);
        assert_eq!(c.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_tournament_exceeds_population() {
        let c = GaConfig::default()
            .with_population_size(2)
            .with_tournament_size(3);
        assert_eq!(
            c.validate(),
            Err(ConfigError::InvalidTournamentSize {
                tournament_size: 3,
                population_size: 2
            })
        );
    }

    #[test]
    fn test_tournament_zero() {
        let c = GaConfig::default().with_tournament_size(0);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidTournamentSize { .. })
        ));
    }

    #[test]
    fn test_rates_out_of_range() {
        let c = GaConfig::default().with_crossover_rate(1.5);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "crossover_rate",
                ..
            })
        ));
        let c = GaConfig::default().with_mutation_rate(-0.1);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "mutation_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_fitness_params() {
        let c = GaConfig::default().with_fitness(FitnessParams::default().with_buffer(f64::NAN));
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_report_generations() {
        let c = GaConfig::default().with_max_generations(25);
        assert!(c.is_report_generation(0));
        assert!(c.is_report_generation(10));
        assert!(c.is_report_generation(20));
        assert!(c.is_report_generation(25));
        assert!(!c.is_report_generation(11));

        let c = c.with_report_interval(0);
        assert!(!c.is_report_generation(10));
        assert!(c.is_report_generation(25));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"population_size": 30, "seed": 99, "fitness": {"buffer": 0.0}}"#;
        let c: GaConfig = serde_json::from_str(json).expect("valid config");
        assert_eq!(c.population_size, 30);
        assert_eq!(c.seed, Some(99));
        assert_eq!(c.max_generations, 100);
        assert_eq!(c.fitness.buffer, 0.0);
        assert_eq!(c.fitness.night_rest_duration, 480.0);
    }
}
