//! Fluent builder for constructing a [`Session`].

use vt_core::{Coordinate, Projection, TraceConfig, WebMercator};
use vt_spatial::{DijkstraRouter, RoadGraphBuilder, Router};

use crate::{Session, SessionResult};

/// Fluent builder for [`Session<R, P>`].
///
/// # Required inputs
///
/// - [`TraceConfig`]: key precision, tick interval, pulse bounds.
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default            |
/// |----------------------------|--------------------|
/// | `.polylines(v)`            | no roads           |
/// | `.router(r)`               | `DijkstraRouter`   |
/// | `.projection(p)`           | `WebMercator`      |
/// | `.road_layer_visible(b)`   | `true`             |
/// | `.adding_points(b)`        | `true`             |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(TraceConfig::default())
///     .polylines(roads)
///     .build()?;
/// session.select_point(start)?;
/// session.select_point(end)?;
/// session.start_driving()?;
/// let mut ticker = IntervalTicker::new(session.config().cadence());
/// session.run(&mut ticker, &mut NoopObserver);
/// ```
pub struct SessionBuilder<R: Router = DijkstraRouter, P: Projection + Clone = WebMercator> {
    config:        TraceConfig,
    polylines:     Vec<Vec<Coordinate>>,
    router:        R,
    projection:    P,
    layer_visible: bool,
    adding_points: bool,
}

impl SessionBuilder {
    /// Start a builder with the default router and projection.
    pub fn new(config: TraceConfig) -> Self {
        Self {
            config,
            polylines:     Vec::new(),
            router:        DijkstraRouter,
            projection:    WebMercator,
            layer_visible: true,
            adding_points: true,
        }
    }
}

impl<R: Router, P: Projection + Clone> SessionBuilder<R, P> {
    /// Add road polylines (planar coordinates, one vertex per entry).
    /// Repeated calls accumulate.
    pub fn polylines<I, L>(mut self, polylines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[Coordinate]>,
    {
        self.polylines
            .extend(polylines.into_iter().map(|l| l.as_ref().to_vec()));
        self
    }

    /// Swap the routing algorithm.
    pub fn router<R2: Router>(self, router: R2) -> SessionBuilder<R2, P> {
        SessionBuilder {
            config:        self.config,
            polylines:     self.polylines,
            router,
            projection:    self.projection,
            layer_visible: self.layer_visible,
            adding_points: self.adding_points,
        }
    }

    /// Swap the planar → geographic projection used for distances.
    pub fn projection<P2: Projection + Clone>(self, projection: P2) -> SessionBuilder<R, P2> {
        SessionBuilder {
            config:        self.config,
            polylines:     self.polylines,
            router:        self.router,
            projection,
            layer_visible: self.layer_visible,
            adding_points: self.adding_points,
        }
    }

    /// Initial visibility of the road layer.
    pub fn road_layer_visible(mut self, visible: bool) -> Self {
        self.layer_visible = visible;
        self
    }

    /// Whether map clicks select points from the start.
    pub fn adding_points(mut self, enabled: bool) -> Self {
        self.adding_points = enabled;
        self
    }

    /// Validate the configuration, build the road graph once, and return an
    /// idle session.
    pub fn build(self) -> SessionResult<Session<R, P>> {
        self.config.validate()?;
        let quantizer = self.config.quantizer()?;

        let mut builder = RoadGraphBuilder::with_quantizer(quantizer);
        builder.add_polylines(&self.polylines);
        let graph = builder.build();

        Ok(Session::new(
            self.config,
            graph,
            self.router,
            self.projection,
            self.layer_visible,
            self.adding_points,
        ))
    }
}
