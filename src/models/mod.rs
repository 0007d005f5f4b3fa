mod booking;
mod car;
mod cart_line;
mod checkout;
mod custom_request;
mod dining;
mod pagination;
mod room;
mod settings;
mod tokens;
mod user;

pub use booking::{Booking, BookingStatus, Guest, NewBooking, PaymentStatus, RoomRef};
pub use car::{Car, CarRental, NewCarRental, RentalStatus};
pub use cart_line::CartLine;
pub use checkout::{
    CheckoutSession, CheckoutStats, CheckoutStatus, CompleteCheckout, ServiceItem, ServiceType,
};
pub use custom_request::{
    ApproveCustomRequest, CustomFoodRequest, NewCustomFoodRequest, PreferredTime,
    RejectCustomRequest, RequestStatus, Requester, RequesterRef,
};
pub use dining::{
    FoodOrder, MenuItem, NewFoodOrder, NewOrderItem, OrderItem, OrderStatus, OrderType,
    PaymentMethod,
};
pub use pagination::{PageQuery, Pagination};
pub use room::Room;
pub use settings::{Brand, Contact, SiteSettings, Socials};
pub use tokens::{AuthTokens, SignInResponse};
pub use user::{AuthProvider, Role, User};
