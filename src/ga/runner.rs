//! Generational GA driver with elitism.
//!
//! # Algorithm
//!
//! 1. Fill the population with uniformly random permutations and score
//!    them; the best becomes the elite.
//! 2. Each generation starts the new population with the elite, unchanged,
//!    then adds offspring until full: two tournament winners from the
//!    previous population, order crossover with probability
//!    `crossover_rate` (else a copy of the first parent), swap mutation with
//!    probability `mutation_rate`.
//! 3. The elite is replaced only by a strictly fitter individual, so the
//!    elite fitness never decreases.
//! 4. The run always executes `max_generations` generations.
//!
//! Catalogs with fewer than two locations have a single possible order and
//! terminate immediately without touching the operators.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

use crate::error::ConfigError;
use crate::evaluation::ItineraryEvaluator;
use crate::models::Catalog;

use super::config::GaConfig;
use super::operators::{order_crossover, random_permutation, swap_mutation, tournament_select};
use super::Itinerary;

/// Lifecycle of a [`GaRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Population built and scored, no generation run yet.
    Initialized,
    /// At least one generation has run and more remain.
    Running { generation: usize },
    /// All generations have run.
    Terminated,
}

/// Progress observation for one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,
    /// Fittest individual of this generation's population.
    pub best_fitness: f64,
    /// Best fitness seen so far in the run.
    pub elite_fitness: f64,
    pub mean_fitness: f64,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best itinerary found, as catalog indices.
    pub best: Itinerary,
    pub best_fitness: f64,
    /// The best itinerary as location IDs.
    pub location_ids: Vec<usize>,
    /// Number of generations executed.
    pub generations: usize,
    /// One entry per generation, starting with generation 0.
    pub history: Vec<GenerationStats>,
}

/// Explicit state of one optimization run.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Catalog, Location, TimeWindow};
/// use u_itinerary::ga::{GaConfig, GaRunner, RunState};
///
/// let tw = TimeWindow::new(0, 10_000).unwrap();
/// let catalog = Catalog::new(vec![
///     Location::new(0, 0.0, 0.0, 0, tw),
///     Location::new(1, 10.0, 0.0, 0, tw),
///     Location::new(2, 20.0, 0.0, 0, tw),
/// ])
/// .unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(30)
///     .with_seed(42);
///
/// let mut runner = GaRunner::new(&catalog, config).unwrap();
/// assert_eq!(runner.state(), RunState::Initialized);
/// runner.step();
/// assert_eq!(runner.state(), RunState::Running { generation: 1 });
///
/// let result = runner.run();
/// assert_eq!(result.best_fitness, -20.0);
/// assert_eq!(result.generations, 30);
/// ```
pub struct GaRunner<'a> {
    evaluator: ItineraryEvaluator<'a>,
    config: GaConfig,
    rng: StdRng,
    population: Vec<Itinerary>,
    elite: Itinerary,
    generation: usize,
    degenerate: bool,
    history: Vec<GenerationStats>,
}

impl<'a> GaRunner<'a> {
    /// Validates the configuration and builds the initial population.
    #[instrument(level = "debug", skip_all, fields(locations = catalog.len(), population_size = config.population_size, seed = ?config.seed))]
    pub fn new(catalog: &'a Catalog, config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let evaluator = ItineraryEvaluator::new(catalog, config.fitness);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let n = catalog.len();
        let degenerate = n < 2;
        let population: Vec<Itinerary> = if degenerate {
            tracing::debug!(locations = n, "Catalog too small to search, using the trivial itinerary");
            let order: Vec<usize> = (0..n).collect();
            let fitness = evaluator.evaluate(&order);
            vec![Itinerary::with_fitness(order, fitness)]
        } else {
            (0..config.population_size)
                .map(|_| {
                    let order = random_permutation(n, &mut rng);
                    let fitness = evaluator.evaluate(&order);
                    Itinerary::with_fitness(order, fitness)
                })
                .collect()
        };

        let elite = fittest(&population).clone();
        let mut runner = Self {
            evaluator,
            config,
            rng,
            population,
            elite,
            generation: 0,
            degenerate,
            history: Vec::new(),
        };
        runner.record_generation();
        Ok(runner)
    }

    /// Builds a runner and drives it to completion.
    pub fn solve(catalog: &'a Catalog, config: GaConfig) -> Result<GaResult, ConfigError> {
        Ok(Self::new(catalog, config)?.run())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        if self.degenerate || self.generation >= self.config.max_generations {
            RunState::Terminated
        } else if self.generation == 0 {
            RunState::Initialized
        } else {
            RunState::Running {
                generation: self.generation,
            }
        }
    }

    /// Number of generations executed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best itinerary seen so far.
    pub fn elite(&self) -> &Itinerary {
        &self.elite
    }

    /// The current population.
    pub fn population(&self) -> &[Itinerary] {
        &self.population
    }

    /// Progress observations recorded so far.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs one generation. Returns `false` if the run had already terminated.
    pub fn step(&mut self) -> bool {
        if self.state() == RunState::Terminated {
            return false;
        }

        let size = self.config.population_size;
        let k = self.config.tournament_size;
        let mut next = Vec::with_capacity(size);
        next.push(self.elite.clone());

        while next.len() < size {
            let p1 = tournament_select(&self.population, k, &mut self.rng);
            let p2 = tournament_select(&self.population, k, &mut self.rng);

            let mut child = if self.rng.random_bool(self.config.crossover_rate) {
                order_crossover(p1.order(), p2.order(), &mut self.rng)
            } else {
                p1.order().to_vec()
            };
            if self.rng.random_bool(self.config.mutation_rate) {
                swap_mutation(&mut child, &mut self.rng);
            }

            let fitness = self.evaluator.evaluate(&child);
            next.push(Itinerary::with_fitness(child, fitness));
        }

        self.population = next;
        self.generation += 1;

        let best = fittest(&self.population);
        if best.fitness() > self.elite.fitness() {
            tracing::debug!(
                generation = self.generation,
                previous = self.elite.fitness(),
                improved = best.fitness(),
                "Elite improved"
            );
            self.elite = best.clone();
        }

        self.record_generation();
        true
    }

    /// Runs the remaining generations and returns the elite.
    #[instrument(level = "debug", skip_all, fields(max_generations = self.config.max_generations))]
    pub fn run(mut self) -> GaResult {
        while self.step() {}

        tracing::info!(
            generations = self.generation,
            best_fitness = self.elite.fitness(),
            "Optimization finished"
        );

        let location_ids = self.evaluator.catalog().ids_of(self.elite.order());
        GaResult {
            best_fitness: self.elite.fitness(),
            best: self.elite,
            location_ids,
            generations: self.generation,
            history: self.history,
        }
    }

    fn record_generation(&mut self) {
        let best_fitness = fittest(&self.population).fitness();
        let mean_fitness = self.population.iter().map(Itinerary::fitness).sum::<f64>()
            / self.population.len() as f64;
        let stats = GenerationStats {
            generation: self.generation,
            best_fitness,
            elite_fitness: self.elite.fitness(),
            mean_fitness,
        };

        if self.config.is_report_generation(self.generation) {
            tracing::info!(
                generation = stats.generation,
                elite_fitness = stats.elite_fitness,
                mean_fitness = stats.mean_fitness,
                "Generation progress"
            );
        }
        self.history.push(stats);
    }
}

/// First individual with the highest fitness.
fn fittest(population: &[Itinerary]) -> &Itinerary {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.fitness() > best.fitness() {
            best = ind;
        }
    }
    best
}
