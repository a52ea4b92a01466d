mod notification;
mod payment;
mod site;
mod user;
