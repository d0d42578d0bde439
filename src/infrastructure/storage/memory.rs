//! In-memory storage implementation
//!
//! Satisfies the same capability set as the SeaORM gateway, including
//! not-found on update/delete of unknown ids. Foreign keys are not
//! checked.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    Booking, BookingRepository, Customer, CustomerRepository, DomainError, DomainResult, Hotel,
    HotelRepository, RepositoryProvider, Room, RoomRepository,
};

/// One table: rows keyed by id plus the id sequence.
struct Table<T> {
    entity: &'static str,
    rows: DashMap<i32, T>,
    next_id: AtomicI32,
}

impl<T: Clone> Table<T> {
    fn new(entity: &'static str) -> Self {
        Self {
            entity,
            rows: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    fn insert(&self, build: impl FnOnce(i32) -> T) -> i32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.insert(id, build(id));
        id
    }

    fn get(&self, id: i32) -> DomainResult<T> {
        self.rows
            .get(&id)
            .map(|row| row.value().clone())
            .ok_or_else(|| DomainError::not_found(self.entity, id))
    }

    fn replace(&self, id: i32, row: T) -> DomainResult<()> {
        match self.rows.get_mut(&id) {
            Some(mut existing) => {
                *existing = row;
                Ok(())
            }
            None => Err(DomainError::not_found(self.entity, id)),
        }
    }

    fn remove(&self, id: i32) -> DomainResult<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(self.entity, id))
    }

    fn all(&self) -> Vec<T> {
        self.rows.iter().map(|e| e.value().clone()).collect()
    }
}

/// In-memory storage for development and testing
pub struct InMemoryRepositoryProvider {
    hotels: Table<Hotel>,
    rooms: Table<Room>,
    bookings: Table<Booking>,
    customers: Table<Customer>,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            hotels: Table::new("Hotel"),
            rooms: Table::new("Room"),
            bookings: Table::new("Booking"),
            customers: Table::new("Customer"),
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryProvider for InMemoryRepositoryProvider {
    fn hotels(&self) -> &dyn HotelRepository {
        &self.hotels
    }

    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}

#[async_trait]
impl HotelRepository for Table<Hotel> {
    async fn create(&self, hotel: Hotel) -> DomainResult<i32> {
        Ok(self.insert(|id| Hotel { id, ..hotel }))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Hotel> {
        self.get(id)
    }

    async fn update(&self, hotel: Hotel) -> DomainResult<()> {
        self.replace(hotel.id, hotel)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.remove(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Hotel>> {
        Ok(self.all())
    }
}

#[async_trait]
impl RoomRepository for Table<Room> {
    async fn create(&self, room: Room) -> DomainResult<i32> {
        Ok(self.insert(|id| Room { id, ..room }))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Room> {
        self.get(id)
    }

    async fn update(&self, room: Room) -> DomainResult<()> {
        self.replace(room.id, room)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.remove(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        Ok(self.all())
    }

    async fn find_by_hotel_id(&self, hotel_id: i32) -> DomainResult<Vec<Room>> {
        Ok(self
            .rows
            .iter()
            .filter(|e| e.value().hotel_id == hotel_id)
            .map(|e| e.value().clone())
            .collect())
    }
}

#[async_trait]
impl BookingRepository for Table<Booking> {
    async fn create(&self, booking: Booking) -> DomainResult<i32> {
        Ok(self.insert(|id| Booking { id, ..booking }))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Booking> {
        self.get(id)
    }

    async fn update(&self, booking: Booking) -> DomainResult<()> {
        self.replace(booking.id, booking)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.remove(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        Ok(self.all())
    }
}

#[async_trait]
impl CustomerRepository for Table<Customer> {
    async fn create(&self, customer: Customer) -> DomainResult<i32> {
        Ok(self.insert(|id| Customer { id, ..customer }))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Customer> {
        self.get(id)
    }

    async fn update(&self, customer: Customer) -> DomainResult<()> {
        self.replace(customer.id, customer)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.remove(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        Ok(self.all())
    }
}
