pub mod add_medicine;
pub mod remove_medicine;
pub mod search_medicines;
pub mod update_medicine;

pub use add_medicine::{AddMedicineCommand, AddMedicineUseCase};
pub use remove_medicine::{RemoveMedicineCommand, RemoveMedicineUseCase};
pub use search_medicines::{
  MedicineDto, SearchMedicinesCommand, SearchMedicinesResponse, SearchMedicinesUseCase,
};
pub use update_medicine::{UpdateMedicineCommand, UpdateMedicineUseCase};
