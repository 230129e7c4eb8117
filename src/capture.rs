use anyhow::Error;
use futures::executor::{LocalPool, ThreadPool};
use futures::future::RemoteHandle;
use futures::task::SpawnExt;

use image::png::PNGEncoder;
use image::ColorType;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Receives every rendered frame as tightly packed RGBA8 rows.
pub trait CaptureAction<D> {
    fn exec(&mut self, image_data: &[D], frame: u64) -> Result<(), Error>;
}

pub fn frame_file_name(frame: u64) -> String {
    format!("{:08}.png", frame)
}

#[derive(Debug)]
pub struct SavePng<P> {
    directory: P,
    width: u32,
    height: u32,
    thread_pool: ThreadPool,
    handles: Vec<RemoteHandle<Result<PathBuf, Error>>>,
}

impl<P: AsRef<Path>> SavePng<P> {
    pub fn new(directory: P, width: u32, height: u32) -> Result<Self, Error> {
        std::fs::create_dir_all(directory.as_ref())?;

        let thread_pool = ThreadPool::builder().create()?;

        Ok(SavePng {
            directory,
            width,
            height,
            thread_pool,
            handles: vec![],
        })
    }

    async fn save_file(
        data: Vec<u8>,
        file_name: String,
        directory: P,
        width: u32,
        height: u32,
    ) -> Result<PathBuf, Error> {
        let path = directory.as_ref().join(file_name);
        let encoder = PNGEncoder::new(BufWriter::new(File::create(&path)?));

        encoder.encode(&data, width, height, ColorType::Rgba8)?;

        log::info!("Saved Frame: {}", path.display());

        Ok(path)
    }

    /// Waits for every pending write and returns the written files in the
    /// order they were queued. All writes run to the end even if one fails;
    /// the first failure is returned.
    pub fn finish(mut self) -> Result<Vec<PathBuf>, Error> {
        let mut local_pool = LocalPool::new();

        let results: Vec<_> = self
            .handles
            .drain(..)
            .map(|handle| local_pool.run_until(handle))
            .collect();

        for err in results.iter().filter_map(|result| result.as_ref().err()) {
            log::warn!("could not save frame: {:?}", err);
        }

        results.into_iter().collect()
    }
}

impl<P: 'static + AsRef<Path> + Send + Sync + Clone> SavePng<P> {
    /// Queues one image under an explicit file name inside the output directory.
    pub fn exec_named(&mut self, image_data: &[u8], file_name: &str) -> Result<(), Error> {
        let expected = self.width as usize * self.height as usize * 4;
        if image_data.len() != expected {
            bail!(
                "{} has {} bytes, a {}x{} RGBA image needs {}",
                file_name,
                image_data.len(),
                self.width,
                self.height,
                expected
            );
        }

        let data = image_data.to_vec();

        self.handles
            .push(self.thread_pool.spawn_with_handle(Self::save_file(
                data,
                file_name.to_string(),
                self.directory.clone(),
                self.width,
                self.height,
            ))?);

        Ok(())
    }
}

impl<P: 'static + AsRef<Path> + Send + Sync + Clone> CaptureAction<u8> for SavePng<P> {
    fn exec(&mut self, image_data: &[u8], frame: u64) -> Result<(), Error> {
        self.exec_named(image_data, &frame_file_name(frame))
    }
}

impl<P> Drop for SavePng<P> {
    fn drop(&mut self) {
        let mut local_pool = LocalPool::new();

        for handle in self.handles.drain(..) {
            if let Err(err) = local_pool.run_until(handle) {
                log::warn!("could not save frame: {:?}", err)
            }
        }
    }
}
