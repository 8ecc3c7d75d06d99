//! Table and column names of the Laberinto Airtable base.

/// Airtable table names, which double as export file stems.
pub mod tables {
    pub const CUSTOMERS: &str = "Contactos";
    pub const WINES: &str = "Vinos";
    pub const LOCATIONS: &str = "Locaciones";
    pub const EXPERIENCES: &str = "Experiencias";
    pub const EVENTS: &str = "Eventos";
    pub const PRODUCTS: &str = "Productos";
    pub const SALES: &str = "Venta de Vinos";
    pub const BOOKINGS: &str = "Reservas";
}

pub mod customer {
    pub const EMAIL: &str = "Correo Electrónico";
    pub const FULL_NAME: &str = "Nombre Completo";
    pub const FIRST_NAME: &str = "Nombre";
    pub const LAST_NAME: &str = "Apellido";
    pub const PHONE: &str = "Número de Teléfono";
    pub const RUT: &str = "RUT";
}

pub mod wine {
    pub const NAME: &str = "Vinos";
    pub const CODE: &str = "Código";
    pub const PRICE: &str = "Precio";
    pub const PRODUCER: &str = "Productor";
    /// Description candidates, in order of preference.
    pub const DESCRIPTION: &[&str] = &["Características Generales", "Notas de Cata", "Descripción"];
    pub const TASTING_NOTES: &str = "Resumen de Características";
    pub const PAIRING_NOTES: &str = "Recomendación de Maridaje";
    pub const BARCODE: &str = "Barcode";
}

pub mod location {
    pub const NAME: &str = "Location Name";
    pub const TYPE: &str = "Type";
    pub const ADDRESS: &str = "Address";
    pub const CITY: &str = "City";
    pub const COUNTRY: &str = "Country";
}

pub mod experience {
    pub const NAME: &str = "Experiencia";
    pub const MODALITY: &str = "Modalidad";
    pub const DESCRIPTION: &[&str] = &["Descripción", "Descripción larga"];
    pub const DURATION: &str = "Duración en minutos";
    pub const MAX_PARTICIPANTS: &str = "Máximo de participantes";
    pub const PRICE: &[&str] = &["Precio", "Precio base"];
    pub const INCLUDES: &str = "Incluye";
    pub const RESTRICTIONS: &str = "Restricciones";
}

pub mod event {
    pub const TITLE: &str = "Evento";
    pub const EXPERIENCE: &str = "Experiencia";
    pub const START: &str = "Fecha y hora de inicio";
    /// Both spellings occur across exports of the base.
    pub const END: &[&str] = &["Fecha y Hora término", "Fecha Hora término"];
    pub const ATTENDEES: &str = "Asistentes";
    pub const STATUS: &[&str] = &["Estado Evento", "Estado"];
    pub const PRICE: &str = "Precio";
    pub const EXPERIENCE_NAME: &str = "Nombre de Experiencia";
    pub const ACTIVITIES: &str = "Actividades Seleccionadas";
    pub const BADGE: &str = "Badge";
    pub const INTERNAL_NOTES: &str = "Notas Internas";
}

pub mod product {
    pub const NAME: &str = "Name";
    pub const WINE_NAME: &str = "Nombre Vino";
    pub const WINE_PRICE: &str = "Precio (from Vino)";
}

pub mod sale {
    pub const CUSTOMER: &str = "Cliente";
    pub const WINES: &str = "Vinos";
    pub const TOTAL: &str = "Total de la Venta";
    pub const DATE: &str = "Fecha de Venta";
    pub const NUMBER: &str = "Número de Venta";
}

pub mod booking {
    pub const ORGANIZER_EMAIL: &str = "Correo Lider (from Grupo)";
    pub const TOTAL: &[&str] = &["Total a pagar grupo final", "Precio Total Hipotético"];
    pub const PAID: &str = "Pagado Total";
    pub const GROUP_SIZE: &str = "Tamaño Grupo (from Grupo)";
    pub const DRINKERS: &str = "Bebedores";
    pub const CHILDREN: &str = "Niños menores de 12 (Reserva)";
    pub const NON_DRINKERS: &str = "No Beben mayores de 12";
    pub const STATUS: &str = "Estado";
    pub const SPECIAL_REQUESTS: &str = "Notas Especiales";
    pub const NOTES: &str = "Observaciones";
    pub const RESERVATION_ID: &str = "Reserva ID";
    pub const PROGRESS: &str = "Progreso";
    pub const DISCOUNTS: &str = "Total Descuentos";
    pub const DEPOSIT: &str = "Abono";
}
