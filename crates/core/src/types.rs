/// Site-relative asset path, e.g. `/assets/service-kitchen.jpg`.
pub type ImageRef = String;
