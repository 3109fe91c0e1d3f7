//! Ranura de vista
//!
//! Guarda la última vista instalada de una página. Cada carga recibe un
//! `LoadTicket` con su generación; sólo el ticket más reciente puede
//! instalar su resultado, y nada se instala después de `teardown`. Así una
//! respuesta lenta de una carga anterior (o de una página ya cerrada) se
//! descarta en vez de pisar el estado vigente.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// Permiso para instalar el resultado de una carga
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Valor instalado junto con su marca de tiempo
#[derive(Debug)]
pub struct Installed<T> {
    pub value: Arc<T>,
    pub installed_at: DateTime<Utc>,
}

impl<T> Clone for Installed<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            installed_at: self.installed_at,
        }
    }
}

#[derive(Debug)]
struct SlotState<T> {
    generation: u64,
    alive: bool,
    current: Option<Installed<T>>,
}

#[derive(Debug)]
pub struct ViewSlot<T> {
    state: Arc<RwLock<SlotState<T>>>,
}

impl<T> Clone for ViewSlot<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewSlot<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SlotState {
                generation: 0,
                alive: true,
                current: None,
            })),
        }
    }

    /// Iniciar una carga; invalida los tickets anteriores
    pub async fn begin_load(&self) -> LoadTicket {
        let mut state = self.state.write().await;
        state.generation += 1;
        LoadTicket {
            generation: state.generation,
        }
    }

    /// Reemplazar la vista si el ticket sigue vigente y la ranura vive.
    /// Devuelve `false` cuando el resultado se descarta.
    pub async fn install(&self, ticket: LoadTicket, value: T) -> bool {
        let mut state = self.state.write().await;
        if !state.alive || state.generation != ticket.generation {
            log::debug!(
                "🗑️ Discarding stale view (ticket {}, current {}, alive {})",
                ticket.generation,
                state.generation,
                state.alive
            );
            return false;
        }
        state.current = Some(Installed {
            value: Arc::new(value),
            installed_at: Utc::now(),
        });
        true
    }

    /// Vaciar la vista si el ticket sigue vigente
    pub async fn clear(&self, ticket: LoadTicket) -> bool {
        let mut state = self.state.write().await;
        if !state.alive || state.generation != ticket.generation {
            return false;
        }
        state.current = None;
        true
    }

    /// Reemplazar la vista instalada por `f(actual)`; sin vista no hace nada
    pub async fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let mut state = self.state.write().await;
        if !state.alive {
            return false;
        }
        match state.current.take() {
            Some(installed) => {
                state.current = Some(Installed {
                    value: Arc::new(f(installed.value.as_ref())),
                    installed_at: installed.installed_at,
                });
                true
            }
            None => false,
        }
    }

    pub async fn current(&self) -> Option<Installed<T>> {
        self.state.read().await.current.clone()
    }

    pub async fn is_alive(&self) -> bool {
        self.state.read().await.alive
    }

    /// Cerrar la ranura: las cargas en vuelo ya no podrán instalar nada
    pub async fn teardown(&self) {
        let mut state = self.state.write().await;
        state.alive = false;
        state.current = None;
    }
}
