use crate::error::Error;
use igvf_constructs::Config;
use std::path::Path;

pub(crate) trait Runner {
    /// Deployment config the command operates on
    fn config(&self, path: &Path) -> Result<Config, Error> {
        let config = Config::from_path(path);

        if let Err(origin) = &config {
            log::error!("{origin:?}");

            return Err(Error::new(
                "Config not found",
                Some("Could not read the deployment config at the given path"),
            ));
        }

        Ok(config?)
    }

    /// Run the command
    ///
    /// Returns an error shown to the user in case of failure
    fn run(&mut self) -> Result<(), Error>;
}

/// Return a runner for a command
pub(crate) trait Runnable {
    fn runner(&self) -> impl Runner;
}
