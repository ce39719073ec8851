//! Fluent builder for constructing a [`Sim`].

use hr_core::{CellId, HexGrid, SimConfig};
use hr_track::{Router, TrackNetwork};

use crate::error::SimResult;
use crate::sim::Sim;

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — speeds, turn rates, grid scale
/// - `R: Router` — the route search (e.g. [`hr_track::TurnRouter`])
///
/// # Optional inputs
///
/// | Method            | Default                                     |
/// |-------------------|---------------------------------------------|
/// | `.network(n)`     | empty network on a grid of `config.edge_len`|
/// | `.train(cell, prev)` | no trains (repeatable)                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), TurnRouter::default())
///     .network(network)
///     .train(start, approach)
///     .build()?;
/// sim.run_ticks(500, &mut NoopObserver);
/// ```
pub struct SimBuilder<R: Router> {
    config:  SimConfig,
    router:  R,
    network: Option<TrackNetwork>,
    trains:  Vec<(CellId, CellId)>,
}

impl<R: Router> SimBuilder<R> {
    pub fn new(config: SimConfig, router: R) -> Self {
        Self {
            config,
            router,
            network: None,
            trains: Vec::new(),
        }
    }

    /// Supply the track network.  When omitted, an empty network on a grid
    /// scaled by `config.edge_len` is used; a supplied network keeps its own
    /// grid.
    pub fn network(mut self, network: TrackNetwork) -> Self {
        self.network = Some(network);
        self
    }

    /// Queue a train spawn: `cell` is where it stands, `prev` defines its
    /// initial heading.  Validated against the network at build time.
    pub fn train(mut self, cell: CellId, prev: CellId) -> Self {
        self.trains.push((cell, prev));
        self
    }

    /// Validate train placements and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<R>> {
        let network = self
            .network
            .unwrap_or_else(|| TrackNetwork::new(HexGrid::new(self.config.edge_len)));

        let mut sim = Sim::new(self.config, network, self.router);
        for (cell, prev) in self.trains {
            sim.add_train(cell, prev)?;
        }
        Ok(sim)
    }
}
