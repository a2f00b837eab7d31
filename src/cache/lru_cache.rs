//! Mapa acotado con política LRU
//!
//! `LruCache` combina un `HashMap` de clave a índice con una lista doblemente
//! enlazada de recencia almacenada en un slab (`Vec` de nodos + lista libre).
//! Promover, insertar, eliminar y desalojar el menos usado son O(1).
//!
//! La estructura no es thread-safe por sí misma: `ApodCache` la protege con
//! un único mutex.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Nodo de la lista de recencia
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Mapa con capacidad fija y desalojo por orden de acceso
#[derive(Debug)]
pub struct LruCache<K, V> {
    map: HashMap<K, usize>,
    nodes: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
    // head = más reciente, tail = menos reciente
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Crear un mapa vacío con la capacidad indicada
    pub fn new(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity.min(1024)),
            nodes: Vec::with_capacity(capacity.min(1024)),
            free: Vec::new(),
            head: None,
            tail: None,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Obtener un valor y marcarlo como el más recientemente usado
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.promote(idx);
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Obtener un valor sin alterar el orden de recencia
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Insertar o reemplazar un valor.
    ///
    /// La clave queda como la más reciente. Si la inserción supera la
    /// capacidad se desaloja exactamente una entrada, la menos usada, y se
    /// devuelve. Un reemplazo nunca desaloja.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(node) = self.nodes[idx].as_mut() {
                node.value = value;
            }
            self.promote(idx);
            return None;
        }

        let node = Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        self.push_front(idx);
        self.map.insert(key, idx);

        if self.map.len() > self.capacity {
            return self.pop_lru();
        }
        None
    }

    /// Eliminar una clave y devolver su valor
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.map.remove(key)?;
        self.release(idx).map(|(_, value)| value)
    }

    /// Desalojar la entrada menos recientemente usada
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let idx = self.tail?;
        let (key, value) = self.release(idx)?;
        self.map.remove(&key);
        Some((key, value))
    }

    /// Claves en orden de recencia, de la más reciente a la menos reciente
    pub fn keys(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            match self.nodes[idx].as_ref() {
                Some(node) => {
                    keys.push(node.key.clone());
                    cursor = node.next;
                }
                None => break,
            }
        }
        keys
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    fn promote(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.unlink(idx);
        self.push_front(idx);
    }

    fn push_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.nodes[idx].as_mut() {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => {
                if let Some(node) = self.nodes[head].as_mut() {
                    node.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.nodes[idx].as_ref() {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.nodes[p].as_mut() {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.nodes[n].as_mut() {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Desenlazar el nodo y devolver su slot a la lista libre
    fn release(&mut self, idx: usize) -> Option<(K, V)> {
        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free.push(idx);
        Some((node.key, node.value))
    }
}
