/// Favicon discovery for website list entries
///
/// Each hostname is probed at most once per session. The cache only grows:
/// entries move from `Pending` to `Found` or `Absent` and are never evicted.
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{join_all, LocalBoxFuture};
use futures::FutureExt;
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::url_helper::{get_favicon_link, get_hostname};

/// How long a favicon load may take before it counts as absent
pub const DEFAULT_PROBE_TIMEOUT_MS: u32 = 5_000;

/// Resolution state of a hostname's favicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaviconState {
    /// A probe is in flight
    Pending,
    Found(String),
    /// Checked, nothing loadable at the conventional location
    Absent,
}

/// Asynchronous reachability check for a favicon link
pub trait FaviconProbe {
    fn probe(&self, link: &str) -> impl Future<Output = bool>;
}

/// Validate the link, then ask the probe; never fails
pub async fn check_with<P: FaviconProbe + ?Sized>(probe: &P, link: &str) -> bool {
    match Url::parse(link) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {
            probe.probe(parsed.as_str()).await
        }
        _ => {
            log::debug!("favicon link rejected without probing: {}", link);
            false
        }
    }
}

/// Loads the link into an `<img>` element, racing a timer
#[derive(Debug, Clone, Copy)]
pub struct ImageProbe {
    timeout_ms: u32,
}

impl ImageProbe {
    pub fn new(timeout_ms: u32) -> Self {
        ImageProbe { timeout_ms }
    }
}

impl Default for ImageProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT_MS)
    }
}

impl FaviconProbe for ImageProbe {
    async fn probe(&self, link: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Ok(image) = web_sys::HtmlImageElement::new() else {
            return false;
        };
        let timeout = i32::try_from(self.timeout_ms).unwrap_or(i32::MAX);

        // Whichever of load, error or timer fires first wins; later callbacks find the sender gone.
        let (sender, receiver) = oneshot::channel::<bool>();
        let sender = Rc::new(RefCell::new(Some(sender)));
        let settle = |loaded: bool| {
            let sender = Rc::clone(&sender);
            Closure::<dyn FnMut()>::once(move || {
                if let Some(sender) = sender.borrow_mut().take() {
                    let _ = sender.send(loaded);
                }
            })
        };
        let on_load = settle(true);
        let on_error = settle(false);
        let on_timeout = settle(false);

        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        let timer = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.as_ref().unchecked_ref(),
            timeout,
        );
        if timer.is_err() {
            log::warn!("could not arm favicon probe timer");
        }
        image.set_src(link);

        let loaded = receiver.await.unwrap_or(false);

        // Detach everything before the closures are dropped at the end of scope
        image.set_onload(None);
        image.set_onerror(None);
        if let Ok(handle) = timer {
            window.clear_timeout_with_handle(handle);
        }
        loaded
    }
}

/// Hostname → favicon state
#[derive(Debug, Default)]
pub struct FaviconCache {
    entries: HashMap<String, FaviconState>,
}

impl FaviconCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hostname: &str) -> Option<&FaviconState> {
        self.entries.get(hostname)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Claim a hostname for probing; false if it is already known
    fn mark_pending(&mut self, hostname: &str) -> bool {
        if self.entries.contains_key(hostname) {
            return false;
        }
        self.entries.insert(hostname.to_string(), FaviconState::Pending);
        true
    }

    fn record(&mut self, hostname: String, link: Option<String>) {
        let state = match link {
            Some(link) => FaviconState::Found(link),
            None => FaviconState::Absent,
        };
        self.entries.insert(hostname, state);
    }
}

/// Issues favicon probes for list URLs and records their outcome
pub struct FaviconResolver<P> {
    cache: Rc<RefCell<FaviconCache>>,
    probe: Rc<P>,
}

impl<P> Clone for FaviconResolver<P> {
    fn clone(&self) -> Self {
        FaviconResolver {
            cache: Rc::clone(&self.cache),
            probe: Rc::clone(&self.probe),
        }
    }
}

impl<P: FaviconProbe + 'static> FaviconResolver<P> {
    pub fn new(probe: P) -> Self {
        FaviconResolver {
            cache: Rc::new(RefCell::new(FaviconCache::new())),
            probe: Rc::new(probe),
        }
    }

    /// Start resolving the favicon for `url`'s hostname
    ///
    /// Returns `None` when the hostname is already pending or resolved.
    /// Otherwise the hostname is marked pending immediately and the returned
    /// future performs the probe and records the result.
    pub fn request(&self, url: &str) -> Option<LocalBoxFuture<'static, ()>> {
        let hostname = get_hostname(url);
        if !self.cache.borrow_mut().mark_pending(&hostname) {
            return None;
        }

        let link = get_favicon_link(url);
        let cache = Rc::clone(&self.cache);
        let probe = Rc::clone(&self.probe);

        Some(async move {
            let found = check_with(probe.as_ref(), &link).await;
            if found {
                log::debug!("favicon: {}", link);
            }
            cache.borrow_mut().record(hostname, found.then_some(link));
        }
        .boxed_local())
    }

    /// Resolve favicons for every URL of a freshly loaded list, concurrently
    pub fn prime<'a>(&self, urls: impl IntoIterator<Item = &'a str>) -> LocalBoxFuture<'static, ()> {
        let tasks: Vec<_> = urls.into_iter().filter_map(|url| self.request(url)).collect();
        join_all(tasks).map(|_| ()).boxed_local()
    }

    pub fn state(&self, url: &str) -> Option<FaviconState> {
        self.cache.borrow().get(&get_hostname(url)).cloned()
    }

    /// The resolved favicon link for `url`'s hostname, if one was found
    pub fn favicon_for(&self, url: &str) -> Option<String> {
        match self.state(url) {
            Some(FaviconState::Found(link)) => Some(link),
            _ => None,
        }
    }

    pub fn cached_hosts(&self) -> usize {
        self.cache.borrow().len()
    }
}
