pub mod noyau;
