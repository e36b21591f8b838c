//! Per-node link estimation between a network and one external variable.

use std::time::Instant;

use tracing::{debug, info, warn};

use netcoupler_core::config::{ExecutionStrategy, LinkConfig, NetCouplerConfig};
use netcoupler_core::errors::{FitError, LinkError, NetCouplerResult};
use netcoupler_core::models::{
    EffectClass, EffectEstimate, LinkDirection, LinkEstimate, LinkEstimateTable, ModelResult,
    ModelSpec,
};
use netcoupler_core::table::DataTable;
use netcoupler_core::traits::ModelFitter;
use netcoupler_network::{EdgeTable, NeighborMap};

use crate::adjustment;
use crate::classify::{classify, ClassifyOptions};
use crate::execution::{catch_panic, run_ordered};

/// Shared, read-only inputs of one run.
struct RunContext<'a> {
    table: &'a DataTable,
    neighbors: NeighborMap,
    external: &'a str,
    direction: LinkDirection,
    fitter: &'a dyn ModelFitter,
    adjustment: &'a [String],
}

/// Estimates exposure-side or outcome-side links for every network node.
#[derive(Debug, Clone, Default)]
pub struct LinkEstimator {
    config: LinkConfig,
    strategy: ExecutionStrategy,
}

impl LinkEstimator {
    pub fn new(config: LinkConfig, strategy: ExecutionStrategy) -> Self {
        Self { config, strategy }
    }

    pub fn from_config(config: &NetCouplerConfig) -> Self {
        Self::new(config.links.clone(), config.execution.strategy())
    }

    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Links from `exposure` to each node: `node ~ exposure + adjustment`.
    pub fn estimate_exposure_links(
        &self,
        table: &DataTable,
        edges: &EdgeTable,
        exposure: &str,
        fitter: &dyn ModelFitter,
        adjustment: &[String],
    ) -> NetCouplerResult<LinkEstimateTable> {
        self.estimate_links(LinkDirection::Exposure, table, edges, exposure, fitter, adjustment)
    }

    /// Links from each node to `outcome`: `outcome ~ node + adjustment`.
    pub fn estimate_outcome_links(
        &self,
        table: &DataTable,
        edges: &EdgeTable,
        outcome: &str,
        fitter: &dyn ModelFitter,
        adjustment: &[String],
    ) -> NetCouplerResult<LinkEstimateTable> {
        self.estimate_links(LinkDirection::Outcome, table, edges, outcome, fitter, adjustment)
    }

    /// One row per node of `edges`, in first-appearance order.
    ///
    /// Malformed requests (an invalid `LinkConfig`, absent or non-numeric
    /// columns, an external variable that is also a node) fail the whole
    /// call. Model failures only mark their node `Undetermined`.
    pub fn estimate_links(
        &self,
        direction: LinkDirection,
        table: &DataTable,
        edges: &EdgeTable,
        external: &str,
        fitter: &dyn ModelFitter,
        adjustment: &[String],
    ) -> NetCouplerResult<LinkEstimateTable> {
        self.config.validate()?;
        let nodes = edges.node_set();
        table.numeric(external)?;
        table.require_numeric(adjustment)?;
        table.require_numeric(&nodes)?;
        if nodes.iter().any(|n| n == external) {
            return Err(LinkError::ExternalIsNetworkNode {
                name: external.to_string(),
            }
            .into());
        }

        let started = Instant::now();
        info!(
            %direction,
            external,
            nodes = nodes.len(),
            fitter = fitter.name(),
            family = %fitter.family(),
            strategy = ?self.strategy,
            "estimating network links"
        );

        let ctx = RunContext {
            table,
            neighbors: edges.neighbor_map(),
            external,
            direction,
            fitter,
            adjustment,
        };
        let rows = run_ordered(self.strategy, &nodes, |node| self.estimate_node(&ctx, node))?;
        let result = LinkEstimateTable::new(direction, external, rows);

        info!(
            %direction,
            external,
            direct = result.count(EffectClass::Direct),
            ambiguous = result.count(EffectClass::Ambiguous),
            none = result.count(EffectClass::NoEffect),
            undetermined = result.count(EffectClass::Undetermined),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "network links estimated"
        );
        Ok(result)
    }

    fn estimate_node(&self, ctx: &RunContext<'_>, node: &str) -> LinkEstimate {
        let mut estimate = LinkEstimate {
            node: node.to_string(),
            external: ctx.external.to_string(),
            direction: ctx.direction,
            steps: Vec::new(),
            effect: EffectClass::Undetermined,
            significance_threshold: self.config.significance_threshold,
            diagnostic: None,
        };

        let sets = match adjustment::enumerate(
            node,
            &ctx.neighbors,
            ctx.adjustment,
            ctx.direction,
            self.config.adjustment_strategy,
        ) {
            Ok(sets) => sets,
            Err(e) => {
                estimate.diagnostic = Some(e.to_string());
                return estimate;
            }
        };

        let (response, focal) = ctx.direction.roles(node, ctx.external);
        estimate.steps = sets
            .into_iter()
            .enumerate()
            .map(|(step, covariates)| {
                let spec = ModelSpec::new(response, focal, covariates, ctx.fitter.family());
                self.fit_step(ctx, step, spec)
            })
            .collect();

        let classification = classify(&estimate.steps, &ClassifyOptions::from(&self.config));
        estimate.effect = classification.effect;
        estimate.diagnostic = classification.diagnostic;
        match estimate.effect {
            EffectClass::Undetermined => warn!(
                node,
                diagnostic = estimate.diagnostic.as_deref().unwrap_or_default(),
                "link undetermined"
            ),
            effect => debug!(node, %effect, "link classified"),
        }
        estimate
    }

    fn fit_step(&self, ctx: &RunContext<'_>, step: usize, spec: ModelSpec) -> ModelResult {
        let fitted = catch_panic(|| ctx.fitter.fit(&spec, ctx.table))
            .unwrap_or_else(|message| Err(FitError::Panicked { message }));
        let adjusted_for = spec.covariates.clone();

        let fitted = match fitted {
            Ok(fitted) => fitted,
            Err(e) => return ModelResult::failed(step, adjusted_for, 0, &e),
        };
        if !fitted.converged {
            let e = FitError::NotConverged {
                iterations: fitted.iterations,
            };
            return ModelResult::failed(step, adjusted_for, fitted.n_obs, &e);
        }
        if fitted.n_obs < self.config.min_observations {
            let e = FitError::TooFewObservations {
                n_obs: fitted.n_obs,
                min: self.config.min_observations,
            };
            return ModelResult::failed(step, adjusted_for, fitted.n_obs, &e);
        }
        match fitted.require(&spec.focal) {
            Ok(coef) => ModelResult::fitted(
                step,
                adjusted_for,
                fitted.n_obs,
                EffectEstimate {
                    estimate: coef.estimate,
                    std_error: coef.std_error,
                    p_value: coef.p_value,
                },
            ),
            Err(e) => ModelResult::failed(step, adjusted_for, fitted.n_obs, &e),
        }
    }
}
