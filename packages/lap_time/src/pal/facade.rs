use std::time::Duration;

use crate::pal::abstractions::TimeSource;
#[cfg(test)]
use crate::pal::fake::FakeTimeSource;
use crate::pal::real::RealTimeSource;

/// Dispatches time source calls to the real clock or, in tests, a fake.
#[derive(Clone, Debug)]
pub(crate) enum TimeSourceFacade {
    Real(RealTimeSource),

    #[cfg(test)]
    Fake(FakeTimeSource),
}

impl TimeSourceFacade {
    pub(crate) fn real() -> Self {
        Self::Real(RealTimeSource::new())
    }
}

impl TimeSource for TimeSourceFacade {
    fn since_epoch(&self) -> Duration {
        match self {
            Self::Real(source) => source.since_epoch(),
            #[cfg(test)]
            Self::Fake(source) => source.since_epoch(),
        }
    }
}

impl From<RealTimeSource> for TimeSourceFacade {
    fn from(source: RealTimeSource) -> Self {
        Self::Real(source)
    }
}

#[cfg(test)]
impl From<FakeTimeSource> for TimeSourceFacade {
    fn from(source: FakeTimeSource) -> Self {
        Self::Fake(source)
    }
}
