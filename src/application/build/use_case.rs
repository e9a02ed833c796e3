//! Build Layer Use Case
//!
//! Orchestrates the layer build:
//! 1. Validate the manifest
//! 2. Recreate the staging directory and copy the manifest next to it
//! 3. Pull the runtime image
//! 4. Install binary-only wheels for the target platform inside the container
//! 5. Compress the staging directory and manifest copy into a timestamped zip
//!
//! Every step runs to completion before the next starts. Failures are not
//! retried and leave the output directory as-is.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::{BuildRequest, BuildResult};
use crate::domain::ports::{
    Archiver, BuildEvent, BuildEventSink, ContainerInvocation, ContainerRunner, ImagePuller,
    NoopBuildEventSink, VolumeMount,
};
use crate::domain::value_objects::{ContentHash, LayerRuntime};
use crate::error::{BuildError, BuildOutcome};

use super::options::{archive_file_name, BuildOptions, MANIFEST_FILE_NAME};

/// Where the output directory is mounted inside the install container
pub const CONTAINER_MOUNT_POINT: &str = "/output";

/// Installer command run inside the container.
///
/// `--only-binary=:all:` together with the explicit platform, implementation
/// and Python version makes pip refuse source distributions, which would
/// otherwise compile for the container's own architecture.
pub fn pip_install_command(runtime: LayerRuntime) -> String {
    format!(
        "pip install --platform {platform} --only-binary=:all: --implementation {implementation} \
         --python-version {version} -r {mount}/{manifest} --target {mount}/{staging} --no-cache-dir",
        platform = runtime.platform().wheel_platform(),
        implementation = runtime.implementation(),
        version = runtime.python_version(),
        mount = CONTAINER_MOUNT_POINT,
        manifest = MANIFEST_FILE_NAME,
        staging = runtime.staging_dir(),
    )
}

/// Build layer use case - orchestrates the build pipeline
///
/// Parameterized by its ports so tests can substitute fakes for the
/// container runtime and the archiver.
pub struct BuildLayerUseCase<P, R, A>
where
    P: ImagePuller,
    R: ContainerRunner,
    A: Archiver,
{
    puller: P,
    runner: R,
    archiver: A,
}

impl<P, R, A> BuildLayerUseCase<P, R, A>
where
    P: ImagePuller,
    R: ContainerRunner,
    A: Archiver,
{
    pub fn new(puller: P, runner: R, archiver: A) -> Self {
        Self {
            puller,
            runner,
            archiver,
        }
    }

    /// Execute the build without progress reporting
    pub fn execute(
        &self,
        request: &BuildRequest,
        options: &BuildOptions,
    ) -> BuildOutcome<BuildResult> {
        self.execute_with_events(request, options, &NoopBuildEventSink)
    }

    /// Execute the build, reporting each step to `sink`
    pub fn execute_with_events(
        &self,
        request: &BuildRequest,
        options: &BuildOptions,
        sink: &dyn BuildEventSink,
    ) -> BuildOutcome<BuildResult> {
        let runtime = request.runtime();
        let manifest = request.manifest();

        if !manifest.is_file() {
            return Err(BuildError::ManifestNotFound {
                path: manifest.to_path_buf(),
            });
        }

        info!(runtime = %runtime, manifest = %manifest.display(), "creating lambda layer");
        sink.on_event(BuildEvent::Started {
            runtime: runtime.id().to_string(),
            manifest: manifest.to_path_buf(),
        });

        let content_hash = if options.content_suffix {
            let bytes = fs::read(manifest)?;
            Some(ContentHash::from_parts([
                bytes.as_slice(),
                runtime.id().as_bytes(),
            ]))
        } else {
            None
        };

        let staging_dir = self.prepare_staging(manifest, runtime, &options.output_dir)?;
        sink.on_event(BuildEvent::StagingPrepared {
            staging_dir: staging_dir.clone(),
        });

        let image = runtime.image();
        info!(image, "pulling image");
        sink.on_event(BuildEvent::PullingImage {
            image: image.to_string(),
        });
        self.puller
            .pull(image)
            .map_err(|source| BuildError::ImageUnavailable {
                image: image.to_string(),
                source,
            })?;

        let invocation = install_invocation(runtime, &absolute_path(&options.output_dir)?);
        info!(platform = %invocation.platform, "installing dependencies in container");
        debug!(command = %invocation.command, "install command");
        sink.on_event(BuildEvent::InstallingDependencies {
            container_platform: runtime.platform().container_platform().to_string(),
            wheel_platform: runtime.platform().wheel_platform().to_string(),
        });
        self.runner
            .run(&invocation)
            .map_err(|source| BuildError::InstallFailed { source })?;

        let archive_name = archive_file_name(runtime, options.started_at, content_hash.as_ref());
        let archive_path = options.output_dir.join(archive_name);
        info!(archive = %archive_path.display(), "creating zip file");
        sink.on_event(BuildEvent::Compressing {
            archive: archive_path.clone(),
        });
        self.archiver
            .archive(
                &options.output_dir,
                &[runtime.staging_dir(), MANIFEST_FILE_NAME],
                &archive_path,
            )
            .map_err(|source| BuildError::CompressionFailed {
                path: archive_path.clone(),
                source,
            })?;

        let size_bytes = fs::metadata(&archive_path)?.len();
        info!(archive = %archive_path.display(), size_bytes, "lambda layer created");
        sink.on_event(BuildEvent::Completed {
            archive: archive_path.clone(),
            size_bytes,
        });

        Ok(BuildResult {
            archive_path,
            size_bytes,
        })
    }

    /// Recreate `<output>/<staging>` and copy the manifest to `<output>/requirements.txt`.
    fn prepare_staging(
        &self,
        manifest: &Path,
        runtime: LayerRuntime,
        output_dir: &Path,
    ) -> BuildOutcome<PathBuf> {
        fs::create_dir_all(output_dir)?;

        let staging_dir = output_dir.join(runtime.staging_dir());
        if staging_dir.exists() {
            debug!(dir = %staging_dir.display(), "removing previous staging directory");
            fs::remove_dir_all(&staging_dir)?;
        }
        fs::create_dir_all(&staging_dir)?;

        let manifest_copy = output_dir.join(MANIFEST_FILE_NAME);
        if !same_file(manifest, &manifest_copy) {
            fs::copy(manifest, &manifest_copy)?;
        }

        Ok(staging_dir)
    }
}

fn install_invocation(runtime: LayerRuntime, host_output_dir: &Path) -> ContainerInvocation {
    ContainerInvocation {
        image: runtime.image().to_string(),
        platform: runtime.platform().container_platform().to_string(),
        mounts: vec![VolumeMount {
            host: host_output_dir.to_path_buf(),
            container: CONTAINER_MOUNT_POINT.to_string(),
        }],
        command: pip_install_command(runtime),
    }
}

/// Volume mounts need an absolute host path
fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Copying a file onto itself truncates it, so detect that case first.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
