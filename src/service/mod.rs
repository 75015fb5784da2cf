//! Form service
//!
//! A small HTTP front end for the sampler. One form configures one
//! distribution, or two side by side in compare mode:
//!
//! ```text
//! GET  /               → empty form
//! POST /               → form + histogram and statistics per distribution
//! GET  /static/<file>  → rendered histogram image
//! ```
//!
//! Every connection carries a single request. Sampling and rendering run on
//! the blocking pool with a fresh entropy-seeded sampler per request.

pub mod form;
pub mod http;
pub mod page;

use crate::config::ServerConfig;
use crate::distribution::Sampler;
use crate::error::SimError;
use crate::output::plot;
use crate::pipeline::naming::RunNamer;
use crate::pipeline::Pipeline;
use crate::stats::compute_statistics;
use crate::util::time::run_timestamp;
use anyhow::{Context, Result};
use chrono::Local;
use form::FormRequest;
use http::{HttpRequest, HttpResponse};
use page::SlotResult;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// HTTP form service
pub struct FormService {
    listen: String,
    static_dir: PathBuf,
    max_size: usize,
    bins: usize,
    namer: RunNamer,
}

impl FormService {
    pub fn new(server: &ServerConfig, bins: usize) -> Self {
        Self {
            listen: server.listen.clone(),
            static_dir: server.static_dir.clone(),
            max_size: server.max_size,
            bins,
            namer: RunNamer::new(),
        }
    }

    /// Bind the configured address and serve forever
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.listen)
            .await
            .with_context(|| format!("Failed to bind form service on {}", self.listen))?;

        println!("Form service listening on http://{}", listener.local_addr()?);
        println!("Serving images from {}", self.static_dir.display());

        self.serve(listener).await
    }

    /// Accept connections on an already-bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        tokio::fs::create_dir_all(&self.static_dir)
            .await
            .with_context(|| format!("Failed to create static directory: {}", self.static_dir.display()))?;

        let service = Arc::new(self);
        loop {
            let (stream, addr) = listener.accept().await.context("Failed to accept connection")?;
            debug!("Connection from {}", addr);

            let service = Arc::clone(&service);
            tokio::spawn(async move {
                if let Err(e) = service.handle_connection(stream).await {
                    warn!("Connection from {} failed: {:#}", addr, e);
                }
            });
        }
    }

    async fn handle_connection(&self, stream: TcpStream) -> Result<()> {
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);

        let response = match http::read_request(&mut reader).await {
            Ok(request) => self.handle(&request).await,
            Err(e) => HttpResponse::error(400, &format!("{:#}", e)),
        };

        response.write_to(&mut write_half).await
    }

    /// Route one request
    pub async fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let response = match (request.method.as_str(), request.path.as_str()) {
            ("GET", "/") => HttpResponse::html(page::render_page(&[], false)),
            ("POST", "/") => self.handle_form(&request.body).await,
            (_, "/") => HttpResponse::error(405, "Use GET or POST"),
            ("GET", path) => match path.strip_prefix("/static/") {
                Some(file) => self.handle_static(file).await,
                None => HttpResponse::not_found(),
            },
            _ => HttpResponse::not_found(),
        };
        info!("{} {} -> {}", request.method, request.path, response.status);
        response
    }

    async fn handle_form(&self, body: &[u8]) -> HttpResponse {
        let form = match FormRequest::from_body(body, self.max_size) {
            Ok(form) => form,
            Err(e) => return HttpResponse::error(400, &e.to_string()),
        };

        let static_dir = self.static_dir.clone();
        let namer = self.namer.clone();
        let bins = self.bins;
        let compare = form.compare;
        let rendered =
            tokio::task::spawn_blocking(move || render_slots(&form, &static_dir, bins, &namer)).await;

        match rendered {
            Ok(Ok(results)) => HttpResponse::html(page::render_page(&results, compare)),
            Ok(Err(e)) => {
                warn!("Form request failed: {}", e);
                HttpResponse::error(500, &e.to_string())
            }
            Err(e) => HttpResponse::error(500, &format!("Render task failed: {}", e)),
        }
    }

    async fn handle_static(&self, file: &str) -> HttpResponse {
        let Some(content_type) = static_file_type(file) else {
            return HttpResponse::not_found();
        };
        match tokio::fs::read(self.static_dir.join(file)).await {
            Ok(bytes) => HttpResponse::bytes(content_type, bytes),
            Err(_) => HttpResponse::not_found(),
        }
    }
}

/// Content type for a servable file name
///
/// Only plain `.png`/`.gif` names directly inside the static directory are
/// served.
pub fn static_file_type(file: &str) -> Option<&'static str> {
    if file.is_empty() || file.starts_with('.') || file.contains(['/', '\\']) || file.contains("..") {
        return None;
    }
    match Path::new(file).extension()?.to_str()? {
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Sample, summarize and render each slot of a form submission
pub fn render_slots(
    form: &FormRequest,
    static_dir: &Path,
    bins: usize,
    namer: &RunNamer,
) -> Result<Vec<SlotResult>, SimError> {
    form.slots
        .iter()
        .map(|slot| {
            let mut sampler = Sampler::from_entropy();
            let sample = sampler.generate(&slot.spec, slot.size)?;
            let stats = compute_statistics(sample.values());

            let file_name = format!(
                "g{}_{}_{}.png",
                slot.slot,
                run_timestamp(&Local::now()),
                namer.next_run()
            );
            let title = Pipeline::histogram_title(slot.spec.kind(), slot.size);
            plot::render_histogram(&sample, &title, &static_dir.join(&file_name), bins)?;
            debug!("Rendered {} for {}", file_name, slot.spec);

            Ok(SlotResult {
                slot: slot.slot,
                title,
                image_url: file_name,
                stats,
            })
        })
        .collect()
}
