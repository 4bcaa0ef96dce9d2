pub const BTN_OPEN: &str = "Abrir carpeta";
pub const BTN_OPEN_FILES: &str = "Abrir imágenes";
pub const FILTER_IMAGES: &str = "Imagen";
pub const BTN_PREV: &str = "Anterior";
pub const BTN_NEXT: &str = "Siguiente";
pub const BTN_PAUSE: &str = "Pausar";
pub const BTN_RESUME: &str = "Reanudar";
pub const BTN_FULLSCREEN: &str = "Pantalla completa";
pub const BTN_ABOUT: &str = "Acerca de";
pub const BTN_CLOSE: &str = "Cerrar";

pub const TEXT_AUTHOR: &str = "Autor: ";
pub const TEXT_LICENSE: &str = "Licencia: MIT";
pub const TEXT_INFOAPP: &str = "Carrusel de imágenes con avance automático.";
pub const TEXT_OPENIMG: &str = "Abre una carpeta con imágenes para comenzar";
pub const TEXT_ROWSORSPACE: &str = "Flechas para navegar, espacio para pausar";
pub const TEXT_F11FULLSCREEN: &str = "F11 para pantalla completa";
pub const TEXT_CLICKHINT: &str = "Clic en la imagen central para pausar";

pub const ERROR_CONFIG: &str = "No se pudo crear el carrusel";
pub const ERROR_SCAN: &str = "Error escaneando directorio";
